use std::fmt;

/// The abstract kind of a column, as seen by the mapping layer.
///
/// Dialects translate a [`Field`] of a given kind into their own storage
/// type. Kinds the mapping layer does not know about are carried as
/// [`DataType::Custom`] with the label the user declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool,

    /// Signed integer
    Int,

    /// Unsigned integer
    Uint,

    /// Floating point, or fixed point when a precision is declared
    Float,

    String,

    /// An instant in time
    Time,

    /// Raw bytes
    Bytes,

    /// User-specified type label
    Custom(String),
}

impl DataType {
    /// The label of this kind, as written in model declarations.
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Uint => "uint",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::Bytes => "bytes",
            DataType::Custom(label) => label,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DataType {
    fn from(label: &str) -> Self {
        match label {
            "bool" => DataType::Bool,
            "int" => DataType::Int,
            "uint" => DataType::Uint,
            "float" => DataType::Float,
            "string" => DataType::String,
            "time" => DataType::Time,
            "bytes" => DataType::Bytes,
            label => DataType::Custom(label.to_string()),
        }
    }
}

/// Describes one column of a model table.
///
/// A `Field` states what the column should be, it is not bound to a live
/// table. Dialects read it to produce the column's SQL type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The name of the column in the database.
    pub name: String,

    pub data_type: DataType,

    /// Bit width for numeric kinds, length for strings and bytes. Zero when
    /// not declared.
    pub size: u64,

    /// Decimal precision, zero when not declared.
    pub precision: u32,

    /// Decimal scale.
    pub scale: u32,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    /// True if the model declares a default value for the column
    pub has_default_value: bool,

    pub not_null: bool,

    /// True if the column is covered by a (non-unique) index
    pub index: bool,

    /// True if the column has a unique constraint
    pub unique: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Field {
        Field {
            name: name.into(),
            data_type: data_type.into(),
            size: 0,
            precision: 0,
            scale: 0,
            primary_key: false,
            auto_increment: false,
            has_default_value: false,
            not_null: false,
            index: false,
            unique: false,
        }
    }

    pub fn size(mut self, size: u64) -> Field {
        self.size = size;
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Field {
        self.precision = precision;
        self.scale = scale;
        self
    }

    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Field {
        self.auto_increment = true;
        self
    }

    pub fn has_default_value(mut self) -> Field {
        self.has_default_value = true;
        self
    }

    pub fn not_null(mut self) -> Field {
        self.not_null = true;
        self
    }

    pub fn index(mut self) -> Field {
        self.index = true;
        self
    }

    pub fn unique(mut self) -> Field {
        self.unique = true;
        self
    }

    /// True when the column is covered by an index or a unique constraint.
    pub fn is_indexed(&self) -> bool {
        self.index || self.unique
    }
}

impl From<DataType> for Field {
    fn from(data_type: DataType) -> Self {
        Field::new("", data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse() {
        assert_eq!(DataType::from("uint"), DataType::Uint);
        assert_eq!(DataType::from("time"), DataType::Time);
    }

    #[test]
    fn unknown_label_is_custom() {
        assert_eq!(
            DataType::from("uuid"),
            DataType::Custom("uuid".to_string())
        );
        assert_eq!(DataType::Custom("uuid".to_string()).to_string(), "uuid");
    }

    #[test]
    fn unique_counts_as_indexed() {
        let field = Field::new("email", DataType::String);
        assert!(!field.is_indexed());
        assert!(field.clone().unique().is_indexed());
        assert!(field.index().is_indexed());
    }
}
