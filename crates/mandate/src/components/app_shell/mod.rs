//! App shell components: Header, Footer
//!
//! Static chrome around the intro and visualization sections.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;
