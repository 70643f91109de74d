pub mod quick_entry;
