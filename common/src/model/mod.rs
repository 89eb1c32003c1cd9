pub mod countdown;
pub mod prefs;
pub mod rfm;
pub mod stream;
pub mod upload;
