mod health_test;
mod helpers;
mod info_test;
mod user_test;
