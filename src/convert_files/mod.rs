mod convert_files;
mod rename_entry;
mod rewrite_manifest;

pub use self::{convert_files::*, rename_entry::*, rewrite_manifest::*};
