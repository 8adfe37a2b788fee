mod format_factory;

pub use format_factory::FormatFactory;
