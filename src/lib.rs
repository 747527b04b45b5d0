//! campusboard
//!
//! Terminal notice board for a group of schools and colleges. Each
//! institution gets a board of rotating surfaces (image gallery, news
//! carousel, quick-update ticker, marquee) plus article pages and an
//! admissions enquiry form.
//!
//! Pure Core / Impure Shell: `rotation`, `model` and `state` take time as
//! an argument and never touch the terminal; `view`, `source` and
//! `submission` own the side effects.

pub mod config;
pub mod logging;
pub mod model;
pub mod rotation;
pub mod source;
pub mod state;
pub mod submission;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
