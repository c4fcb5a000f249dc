mod field;
mod footer;

pub use field::render_field;
pub use footer::render_footer;
