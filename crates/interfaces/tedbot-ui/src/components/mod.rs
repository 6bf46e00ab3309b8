pub mod header;
pub mod tabs;
