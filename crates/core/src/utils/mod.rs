pub mod cookie_utils;
