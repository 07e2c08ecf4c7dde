mod add_frontmatter;
mod frontmatter;

pub use self::{add_frontmatter::*, frontmatter::*};
