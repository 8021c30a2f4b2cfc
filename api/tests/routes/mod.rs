mod database;
mod exercises;
mod fallback_test;
mod health_test;
mod queries;
mod tables;
