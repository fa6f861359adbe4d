#[cfg(feature = "cli")]
pub mod sizer;
