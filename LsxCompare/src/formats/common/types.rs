//! Attribute type tags - the Larian type ids and their LSX names

pub type TypeId = u32;

// Type constants used internally for type identification
pub(crate) const TYPE_NONE: TypeId = 0;
pub(crate) const TYPE_UINT8: TypeId = 1;
pub(crate) const TYPE_INT16: TypeId = 2;
pub(crate) const TYPE_UINT16: TypeId = 3;
pub(crate) const TYPE_INT32: TypeId = 4;
pub(crate) const TYPE_UINT32: TypeId = 5;
pub(crate) const TYPE_FLOAT: TypeId = 6;
pub(crate) const TYPE_DOUBLE: TypeId = 7;
pub(crate) const TYPE_IVEC2: TypeId = 8;
pub(crate) const TYPE_IVEC3: TypeId = 9;
pub(crate) const TYPE_IVEC4: TypeId = 10;
pub(crate) const TYPE_FVEC2: TypeId = 11;
pub(crate) const TYPE_FVEC3: TypeId = 12;
pub(crate) const TYPE_FVEC4: TypeId = 13;
pub(crate) const TYPE_MAT2X2: TypeId = 14;
pub(crate) const TYPE_MAT3X3: TypeId = 15;
pub(crate) const TYPE_MAT3X4: TypeId = 16;
pub(crate) const TYPE_MAT4X3: TypeId = 17;
pub(crate) const TYPE_MAT4X4: TypeId = 18;
pub(crate) const TYPE_BOOL: TypeId = 19;
pub(crate) const TYPE_STRING: TypeId = 20;
pub(crate) const TYPE_PATH: TypeId = 21;
pub(crate) const TYPE_FIXEDSTRING: TypeId = 22;
pub(crate) const TYPE_LSSTRING: TypeId = 23;
pub(crate) const TYPE_UINT64: TypeId = 24;
pub(crate) const TYPE_SCRATCHBUFFER: TypeId = 25;
pub(crate) const TYPE_OLD_INT64: TypeId = 26;
pub(crate) const TYPE_INT8: TypeId = 27;
pub(crate) const TYPE_TRANSLATEDSTRING: TypeId = 28;
pub(crate) const TYPE_WSTRING: TypeId = 29;
pub(crate) const TYPE_LSWSTRING: TypeId = 30;
pub(crate) const TYPE_GUID: TypeId = 31;
pub(crate) const TYPE_INT64: TypeId = 32;
pub(crate) const TYPE_TRANSLATEDFSSTRING: TypeId = 33;

/// Convert type name string to type ID
#[must_use]
pub fn type_name_to_id(type_name: &str) -> TypeId {
    match type_name {
        "uint8" | "Byte" => TYPE_UINT8,
        "int16" | "Short" => TYPE_INT16,
        "uint16" | "UShort" => TYPE_UINT16,
        "int32" | "Int" => TYPE_INT32,
        "uint32" | "UInt" => TYPE_UINT32,
        "float" | "Float" => TYPE_FLOAT,
        "double" | "Double" => TYPE_DOUBLE,
        "ivec2" | "IVec2" => TYPE_IVEC2,
        "ivec3" | "IVec3" => TYPE_IVEC3,
        "ivec4" | "IVec4" => TYPE_IVEC4,
        "fvec2" | "Vec2" => TYPE_FVEC2,
        "fvec3" | "Vec3" => TYPE_FVEC3,
        "fvec4" | "Vec4" => TYPE_FVEC4,
        "mat2x2" | "Mat2" => TYPE_MAT2X2,
        "mat3x3" | "Mat3" => TYPE_MAT3X3,
        "mat3x4" | "Mat3x4" => TYPE_MAT3X4,
        "mat4x3" | "Mat4x3" => TYPE_MAT4X3,
        "mat4x4" | "Mat4" => TYPE_MAT4X4,
        "bool" | "Bool" => TYPE_BOOL,
        "string" | "String" => TYPE_STRING,
        "path" | "Path" => TYPE_PATH,
        "FixedString" => TYPE_FIXEDSTRING,
        "LSString" => TYPE_LSSTRING,
        "uint64" | "ULongLong" => TYPE_UINT64,
        "ScratchBuffer" => TYPE_SCRATCHBUFFER,
        "old_int64" | "Long" => TYPE_OLD_INT64,
        "int8" | "Int8" => TYPE_INT8,
        "TranslatedString" => TYPE_TRANSLATEDSTRING,
        "WString" => TYPE_WSTRING,
        "LSWString" => TYPE_LSWSTRING,
        "guid" | "UUID" => TYPE_GUID,
        "int64" | "Int64" => TYPE_INT64,
        "TranslatedFSString" => TYPE_TRANSLATEDFSSTRING,
        _ => TYPE_NONE,
    }
}

/// Resolve the `type` attribute of an LSX `<attribute>` to a type id.
///
/// Older LSX writers emit the numeric id (`type="6"`), current ones emit the
/// name (`type="float"`). Both resolve to the same id; anything unknown is
/// `TYPE_NONE`.
#[must_use]
pub fn resolve_type_tag(tag: &str) -> TypeId {
    if !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit()) {
        match tag.parse::<TypeId>() {
            Ok(id) if id <= TYPE_TRANSLATEDFSSTRING => id,
            _ => TYPE_NONE,
        }
    } else {
        type_name_to_id(tag)
    }
}

/// Check if a type holds floating point components whose text form may
/// legitimately vary between writers.
///
/// Only scalar floats, float vectors and the 4x4 matrix qualify; the
/// smaller matrices and integer vectors are compared as written.
#[must_use]
pub fn is_float_class(type_id: TypeId) -> bool {
    matches!(
        type_id,
        TYPE_FLOAT | TYPE_DOUBLE | TYPE_FVEC2 | TYPE_FVEC3 | TYPE_FVEC4 | TYPE_MAT4X4
    )
}
