pub mod aggregate;
pub mod bar;
pub mod binning;
pub mod table;

pub use aggregate::CountTable;
pub use binning::BinLayout;
pub use table::Table;
