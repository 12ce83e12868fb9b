pub mod prefs_store;
