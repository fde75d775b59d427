pub mod book_page;
pub mod content_page;
pub mod contents;
pub mod cover;
pub mod navigation;
pub mod quiz_page;
pub mod references;
pub mod venn;
