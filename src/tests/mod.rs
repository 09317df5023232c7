pub mod contacts_db_tests;
pub mod errors_tests;
pub mod models_tests;
