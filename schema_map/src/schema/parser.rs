//! Schema parser
//!
//! Turns a model instance into a [`Schema`]: resolves the table name,
//! extracts and classifies every exported member, and indexes the result.
//! Parsing is all-or-nothing; a single unmappable member fails the call.

use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_TAG_KEY};
use crate::error::{Error, Result};
use crate::models::Model;
use crate::schema::field::extract_fields;
use crate::schema::naming::resolve_table_name;
use crate::schema::types::Schema;

/// Parse a model with the default configuration
pub fn parse<M: Model + ?Sized>(model: &M) -> Result<Schema> {
    SchemaParser::default().parse(model)
}

/// Derives table schemas from models
#[derive(Debug, Clone)]
pub struct SchemaParser {
    tag_key: String,
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::with_tag_key(DEFAULT_TAG_KEY)
    }
}

impl SchemaParser {
    /// Create a parser from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_tag_key(config.parser.tag_key.clone())
    }

    /// Create a parser reading tags from the given annotation key
    pub fn with_tag_key(tag_key: impl Into<String>) -> Self {
        Self {
            tag_key: tag_key.into(),
        }
    }

    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    /// Parse a model into a schema
    pub fn parse<M: Model + ?Sized>(&self, model: &M) -> Result<Schema> {
        let descriptor = M::descriptor();
        debug!(model = descriptor.name(), kind = %descriptor.kind(), "Parsing model");

        if !descriptor.is_struct() {
            warn!(model = descriptor.name(), kind = %descriptor.kind(), "Model is not a struct");
            return Err(Error::InvalidModel(format!(
                "{} is not a struct with named fields (kind: {})",
                descriptor.name(),
                descriptor.kind()
            )));
        }

        let table_name = resolve_table_name(model);
        debug!(model = descriptor.name(), table = %table_name, "Resolved table name");

        let fields = extract_fields(&descriptor, &self.tag_key).map_err(|e| {
            warn!(model = descriptor.name(), error = %e, "Failed to extract fields");
            e
        })?;

        let schema = Schema::new(descriptor, table_name, fields);
        debug!(
            table = schema.name(),
            columns = ?schema.field_names(),
            "Parsed schema"
        );

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::reflect::{Kind, Member, Reflect, TypeDescriptor};
    use crate::schema::types::StorageType;
    use pretty_assertions::assert_eq;

    struct Event;

    impl Model for Event {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::new("Event", Kind::Struct)
                .member(Member::new("Id", u64::type_info).tag("db", "PRIMARY KEY"))
                .member(Member::new("At", chrono::NaiveDateTime::type_info))
        }
    }

    struct Status;

    impl Model for Status {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::new("Status", Kind::Enum)
        }
    }

    #[test]
    fn parses_hand_built_descriptor() {
        let schema = parse(&Event).unwrap();

        assert_eq!(schema.name(), "Event");
        assert_eq!(schema.field_names(), ["Id", "At"]);
        assert_eq!(schema.fields()[1].storage_type(), StorageType::DateTime);
        assert_eq!(schema.model().name(), "Event");
    }

    #[test]
    fn configured_tag_key_is_used() {
        let config = Config {
            parser: ParserConfig {
                tag_key: "db".to_string(),
            },
            logging: None,
        };

        let schema = SchemaParser::new(&config).parse(&Event).unwrap();
        assert_eq!(schema.get_field("Id").unwrap().tag(), "PRIMARY KEY");

        let schema = SchemaParser::default().parse(&Event).unwrap();
        assert_eq!(schema.get_field("Id").unwrap().tag(), "");
    }

    #[test]
    fn non_struct_model_is_invalid() {
        let err = parse(&Status).unwrap_err();

        assert!(matches!(err, Error::InvalidModel(_)));
        assert_eq!(
            err.to_string(),
            "Invalid model: Status is not a struct with named fields (kind: enum)"
        );
    }
}
