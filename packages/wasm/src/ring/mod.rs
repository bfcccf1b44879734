//! Webring membership and navigation.
//!
//! Member sites form a directed cycle: every site links to the next one and
//! the last links back to the first. Navigation follows those links.

mod site;
mod webring;

pub use site::{Internship, MemberSite};
pub use webring::WebRing;
