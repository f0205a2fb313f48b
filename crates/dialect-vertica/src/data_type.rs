use dialect_core::schema::{DataType, Field};

/// Smallest length stored as a `medium` text or blob.
const MEDIUM_MIN: u64 = 65_536;

/// Largest length stored as a `medium` text or blob.
const MEDIUM_MAX: u64 = 1 << 24;

/// Length given to strings that take part in keys or defaults but declare
/// none. 191 four-byte characters still fit a 767-byte index prefix.
const KEYED_STRING_SIZE: u64 = 191;

/// Maps a column description to its Vertica column type.
pub(crate) fn data_type_of(field: &Field, default_string_size: u64) -> String {
    match &field.data_type {
        DataType::Bool => "boolean".to_string(),
        DataType::Int | DataType::Uint => integer(field),
        DataType::Float => float(field),
        DataType::String => string(field, default_string_size),
        DataType::Time => time(field),
        DataType::Bytes => bytes(field),
        DataType::Custom(label) => label.clone(),
    }
}

fn integer(field: &Field) -> String {
    let mut sql_type = match field.size {
        0..=8 => "tinyint",
        9..=16 => "smallint",
        17..=24 => "mediumint",
        25..=32 => "int",
        _ => "bigint",
    }
    .to_string();

    if field.data_type == DataType::Uint {
        sql_type.push_str(" unsigned");
    }

    if field.auto_increment {
        sql_type.push_str(" AUTO_INCREMENT");
    }

    sql_type
}

fn float(field: &Field) -> String {
    if field.precision > 0 {
        return format!("decimal({}, {})", field.precision, field.scale);
    }

    if field.size <= 32 {
        "float".to_string()
    } else {
        "double".to_string()
    }
}

fn string(field: &Field, default_string_size: u64) -> String {
    let mut size = field.size;

    if size == 0 {
        if default_string_size > 0 {
            size = default_string_size;
        } else if field.primary_key || field.has_default_value || field.is_indexed() {
            // Unbounded text can't be keyed or carry a default
            size = KEYED_STRING_SIZE;
        }
    }

    if (MEDIUM_MIN..=MEDIUM_MAX).contains(&size) {
        "mediumtext".to_string()
    } else if size > MEDIUM_MAX || size == 0 {
        "longtext".to_string()
    } else {
        format!("varchar({size})")
    }
}

fn time(field: &Field) -> String {
    let precision = if field.precision > 0 {
        format!("({})", field.precision)
    } else {
        String::new()
    };

    if field.not_null || field.primary_key {
        format!("datetime{precision}")
    } else {
        format!("datetime{precision} NULL")
    }
}

fn bytes(field: &Field) -> String {
    let size = field.size;

    if size > 0 && size < MEDIUM_MIN {
        return format!("varbinary({size})");
    }

    if (MEDIUM_MIN..=MEDIUM_MAX).contains(&size) {
        return "mediumblob".to_string();
    }

    "longblob".to_string()
}
