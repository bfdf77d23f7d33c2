pub static TEST_DATABASE_URL: &str = "sqlite::memory:";
