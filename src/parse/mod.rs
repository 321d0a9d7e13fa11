pub mod document_parser;
pub mod document_serializer;

pub use document_parser::parse_document;
pub use document_serializer::serialize_document;
