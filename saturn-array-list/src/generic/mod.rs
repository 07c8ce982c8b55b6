pub mod array_list;
pub mod list;
