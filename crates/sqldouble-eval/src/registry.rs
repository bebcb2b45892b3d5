//! Operator registry for the DOUBLE type
//!
//! The registry maps `(operand type, operator kind, null convention)` to a
//! directly callable operator. It is populated once, then shared read-only
//! (it is `Send + Sync`) and passed explicitly to whoever evaluates rows.

use crate::error::{EvalError, EvalResult};
use crate::operators::comparison::ordering_to_long;
use crate::operators::{
    add, between, cast_from_bigint, cast_from_boolean, cast_from_integer, cast_from_real,
    cast_from_smallint, cast_from_tinyint, cast_from_varchar, cast_to_bigint, cast_to_boolean,
    cast_to_integer, cast_to_real, cast_to_smallint, cast_to_tinyint, cast_to_varchar,
    compare_unordered_first, compare_unordered_last, divide, equal, greater_than,
    greater_than_or_equal, hash_code, is_distinct_from, is_indeterminate, less_than,
    less_than_or_equal, modulus, multiply, negate, not_equal, saturated_floor_cast_to_bigint,
    saturated_floor_cast_to_integer, saturated_floor_cast_to_real,
    saturated_floor_cast_to_smallint, saturated_floor_cast_to_tinyint, subtract, xx_hash_64,
};
use log::debug;
use serde::{Deserialize, Serialize};
use sqldouble_types::{SqlType, SqlValue};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type alias for operator implementations.
///
/// Receives the arguments and the bound return type (which carries the
/// declared length of a `varchar(n)` cast target).
pub type ScalarOpFn = Arc<dyn Fn(&[SqlValue], &SqlType) -> EvalResult<SqlValue> + Send + Sync>;

/// Kind of operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Negate,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Between,
    IsDistinctFrom,
    Indeterminate,
    HashCode,
    XxHash64,
    ComparisonUnorderedLast,
    ComparisonUnorderedFirst,
    Cast { target: SqlType },
    SaturatedFloorCast { target: SqlType },
}

impl OperatorKind {
    /// Operators that take no type parameter, in registration order
    pub const SIMPLE: [OperatorKind; 19] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulus,
        Self::Negate,
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::Between,
        Self::IsDistinctFrom,
        Self::Indeterminate,
        Self::HashCode,
        Self::XxHash64,
        Self::ComparisonUnorderedLast,
        Self::ComparisonUnorderedFirst,
    ];

    /// Snake-case operator name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulus => "modulus",
            Self::Negate => "negate",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::LessThan => "less_than",
            Self::LessThanOrEqual => "less_than_or_equal",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqual => "greater_than_or_equal",
            Self::Between => "between",
            Self::IsDistinctFrom => "is_distinct_from",
            Self::Indeterminate => "indeterminate",
            Self::HashCode => "hash_code",
            Self::XxHash64 => "xx_hash_64",
            Self::ComparisonUnorderedLast => "comparison_unordered_last",
            Self::ComparisonUnorderedFirst => "comparison_unordered_first",
            Self::Cast { .. } => "cast",
            Self::SaturatedFloorCast { .. } => "saturated_floor_cast",
        }
    }

    /// Look up a parameterless operator by name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::SIMPLE.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether the operator understands null arguments itself
    pub const fn is_null_aware(&self) -> bool {
        matches!(self, Self::IsDistinctFrom | Self::Indeterminate)
    }

    /// Cast target type, if this is a cast
    pub const fn target(&self) -> Option<SqlType> {
        match self {
            Self::Cast { target } | Self::SaturatedFloorCast { target } => Some(*target),
            _ => None,
        }
    }

    /// Same kind with the cast target's parameters stripped
    pub const fn base(&self) -> Self {
        match self {
            Self::Cast { target } => Self::Cast { target: target.base() },
            Self::SaturatedFloorCast { target } => Self::SaturatedFloorCast {
                target: target.base(),
            },
            other => *other,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(f, "{} to {}", self.name(), target),
            None => f.write_str(self.name()),
        }
    }
}

/// How null arguments and results cross the call boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullConvention {
    /// Arguments are never null; a null argument is an error
    NeverNull,
    /// Null arguments produce a null result, unless the operator is null-aware
    Nullable,
}

impl fmt::Display for NullConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeverNull => write!(f, "never-null"),
            Self::Nullable => write!(f, "nullable"),
        }
    }
}

/// Registry lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorKey {
    pub operand_type: SqlType,
    pub kind: OperatorKind,
    pub convention: NullConvention,
}

impl OperatorKey {
    /// Create a key; type parameters such as varchar lengths are stripped
    pub fn new(operand_type: SqlType, kind: OperatorKind, convention: NullConvention) -> Self {
        Self {
            operand_type: operand_type.base(),
            kind: kind.base(),
            convention,
        }
    }
}

impl fmt::Display for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) [{}]", self.kind, self.operand_type, self.convention)
    }
}

/// Operator signature for argument checking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorSignature {
    /// Operator kind
    pub kind: OperatorKind,
    /// Argument types
    pub argument_types: Vec<SqlType>,
    /// Return type
    pub return_type: SqlType,
}

impl OperatorSignature {
    /// Create a new operator signature
    pub fn new(kind: OperatorKind, argument_types: Vec<SqlType>, return_type: SqlType) -> Self {
        Self {
            kind,
            argument_types,
            return_type,
        }
    }

    /// Create a unary operator signature
    pub fn unary(kind: OperatorKind, operand_type: SqlType, return_type: SqlType) -> Self {
        Self::new(kind, vec![operand_type], return_type)
    }

    /// Create a binary operator signature
    pub fn binary(kind: OperatorKind, operand_type: SqlType, return_type: SqlType) -> Self {
        Self::new(kind, vec![operand_type, operand_type], return_type)
    }

    /// Create a cast signature
    pub fn cast(source: SqlType, target: SqlType) -> Self {
        Self::new(OperatorKind::Cast { target }, vec![source], target)
    }

    /// Check if non-null arguments match the declared types
    pub fn matches(&self, arguments: &[SqlValue]) -> bool {
        self.argument_types.len() == arguments.len()
            && self
                .argument_types
                .iter()
                .zip(arguments)
                .all(|(expected, value)| match value.get_type() {
                    Some(actual) => actual.base() == expected.base(),
                    None => true,
                })
    }
}

impl fmt::Display for OperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OperatorKind::Cast { target } => {
                write!(f, "cast({} as {})", self.argument_types[0], target)
            }
            OperatorKind::SaturatedFloorCast { target } => {
                write!(f, "saturated_floor_cast({} as {})", self.argument_types[0], target)
            }
            kind => {
                let arguments: Vec<String> =
                    self.argument_types.iter().map(ToString::to_string).collect();
                write!(f, "{}({}) -> {}", kind.name(), arguments.join(", "), self.return_type)
            }
        }
    }
}

/// A registered operator bound to a calling convention
#[derive(Clone)]
pub struct ScalarOperator {
    signature: OperatorSignature,
    convention: NullConvention,
    implementation: ScalarOpFn,
}

impl fmt::Debug for ScalarOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarOperator")
            .field("signature", &self.signature.to_string())
            .field("convention", &self.convention)
            .finish()
    }
}

impl ScalarOperator {
    /// Declared signature
    pub fn signature(&self) -> &OperatorSignature {
        &self.signature
    }

    /// Calling convention
    pub fn convention(&self) -> NullConvention {
        self.convention
    }

    /// Invoke with the declared return type
    pub fn invoke(&self, arguments: &[SqlValue]) -> EvalResult<SqlValue> {
        self.invoke_as(arguments, &self.signature.return_type)
    }

    /// Invoke with an explicit return type, e.g. `varchar(5)` for a bounded text cast
    pub fn invoke_as(&self, arguments: &[SqlValue], return_type: &SqlType) -> EvalResult<SqlValue> {
        let expected = self.signature.argument_types.len();
        if arguments.len() != expected {
            return Err(EvalError::argument_count(
                self.signature.to_string(),
                expected,
                arguments.len(),
            ));
        }
        if !self.signature.matches(arguments) {
            let found: Vec<String> = arguments
                .iter()
                .map(|v| v.get_type().map_or_else(|| "null".to_string(), |t| t.to_string()))
                .collect();
            let expected: Vec<String> =
                self.signature.argument_types.iter().map(ToString::to_string).collect();
            return Err(EvalError::type_mismatch(expected.join(", "), found.join(", ")));
        }

        if arguments.iter().any(SqlValue::is_null) {
            match self.convention {
                NullConvention::NeverNull => {
                    return Err(EvalError::null_argument(self.signature.to_string()));
                }
                NullConvention::Nullable if !self.signature.kind.is_null_aware() => {
                    return Ok(SqlValue::Null);
                }
                NullConvention::Nullable => {}
            }
        }

        (self.implementation)(arguments, return_type)
    }
}

/// Combined operator registry
#[derive(Default)]
pub struct OperatorRegistry {
    operators: HashMap<OperatorKey, ScalarOperator>,
}

impl OperatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all DOUBLE operators registered
    pub fn with_double_operators() -> Self {
        let mut registry = Self::new();
        registry.register_double_operators();
        registry
    }

    /// Register an operator under both calling conventions
    pub fn register(&mut self, signature: OperatorSignature, implementation: ScalarOpFn) {
        let operand_type = signature
            .argument_types
            .first()
            .copied()
            .unwrap_or(signature.return_type);
        for convention in [NullConvention::NeverNull, NullConvention::Nullable] {
            let key = OperatorKey::new(operand_type, signature.kind, convention);
            self.operators.insert(
                key,
                ScalarOperator {
                    signature: signature.clone(),
                    convention,
                    implementation: implementation.clone(),
                },
            );
        }
    }

    /// Get an operator by key
    pub fn get(&self, key: &OperatorKey) -> Option<&ScalarOperator> {
        self.operators.get(key)
    }

    /// Resolve an operator, failing if it is not registered
    pub fn resolve(
        &self,
        operand_type: SqlType,
        kind: OperatorKind,
        convention: NullConvention,
    ) -> EvalResult<&ScalarOperator> {
        let key = OperatorKey::new(operand_type, kind, convention);
        self.get(&key)
            .ok_or_else(|| EvalError::operator_not_found(key.to_string()))
    }

    /// Resolve and invoke. Casts use their (possibly bounded) target as return type.
    pub fn invoke(
        &self,
        operand_type: SqlType,
        kind: OperatorKind,
        convention: NullConvention,
        arguments: &[SqlValue],
    ) -> EvalResult<SqlValue> {
        let operator = self.resolve(operand_type, kind, convention)?;
        match kind.target() {
            Some(target) => operator.invoke_as(arguments, &target),
            None => operator.invoke(arguments),
        }
    }

    /// Number of registered (key, operator) entries
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// All registered keys, sorted by their display form
    pub fn keys(&self) -> Vec<OperatorKey> {
        let mut keys: Vec<OperatorKey> = self.operators.keys().copied().collect();
        keys.sort_by_cached_key(ToString::to_string);
        keys
    }

    /// Register every DOUBLE operator
    pub fn register_double_operators(&mut self) {
        let before = self.len();
        self.register_arithmetic();
        self.register_comparison();
        self.register_distinctness();
        self.register_hash();
        self.register_casts();
        debug!("registered {} double operator entries", self.len() - before);
    }

    fn register_arithmetic(&mut self) {
        let binary: [(OperatorKind, fn(f64, f64) -> f64); 5] = [
            (OperatorKind::Add, add),
            (OperatorKind::Subtract, subtract),
            (OperatorKind::Multiply, multiply),
            (OperatorKind::Divide, divide),
            (OperatorKind::Modulus, modulus),
        ];
        for (kind, op) in binary {
            self.register(
                OperatorSignature::binary(kind, SqlType::Double, SqlType::Double),
                Arc::new(move |args, _| {
                    Ok(SqlValue::Double(op(double_at(args, 0)?, double_at(args, 1)?)))
                }),
            );
        }
        self.register(
            OperatorSignature::unary(OperatorKind::Negate, SqlType::Double, SqlType::Double),
            Arc::new(|args, _| Ok(SqlValue::Double(negate(double_at(args, 0)?)))),
        );
    }

    fn register_comparison(&mut self) {
        let predicates: [(OperatorKind, fn(f64, f64) -> bool); 6] = [
            (OperatorKind::Equal, equal),
            (OperatorKind::NotEqual, not_equal),
            (OperatorKind::LessThan, less_than),
            (OperatorKind::LessThanOrEqual, less_than_or_equal),
            (OperatorKind::GreaterThan, greater_than),
            (OperatorKind::GreaterThanOrEqual, greater_than_or_equal),
        ];
        for (kind, op) in predicates {
            self.register(
                OperatorSignature::binary(kind, SqlType::Double, SqlType::Boolean),
                Arc::new(move |args, _| {
                    Ok(SqlValue::Boolean(op(double_at(args, 0)?, double_at(args, 1)?)))
                }),
            );
        }
        self.register(
            OperatorSignature::new(
                OperatorKind::Between,
                vec![SqlType::Double; 3],
                SqlType::Boolean,
            ),
            Arc::new(|args, _| {
                Ok(SqlValue::Boolean(between(
                    double_at(args, 0)?,
                    double_at(args, 1)?,
                    double_at(args, 2)?,
                )))
            }),
        );

        let orderings: [(OperatorKind, fn(f64, f64) -> std::cmp::Ordering); 2] = [
            (OperatorKind::ComparisonUnorderedLast, compare_unordered_last),
            (OperatorKind::ComparisonUnorderedFirst, compare_unordered_first),
        ];
        for (kind, op) in orderings {
            self.register(
                OperatorSignature::binary(kind, SqlType::Double, SqlType::Bigint),
                Arc::new(move |args, _| {
                    let ordering = op(double_at(args, 0)?, double_at(args, 1)?);
                    Ok(SqlValue::Bigint(ordering_to_long(ordering)))
                }),
            );
        }
    }

    fn register_distinctness(&mut self) {
        self.register(
            OperatorSignature::binary(
                OperatorKind::IsDistinctFrom,
                SqlType::Double,
                SqlType::Boolean,
            ),
            Arc::new(|args, _| {
                Ok(SqlValue::Boolean(is_distinct_from(
                    nullable_double_at(args, 0)?,
                    nullable_double_at(args, 1)?,
                )))
            }),
        );
        self.register(
            OperatorSignature::unary(
                OperatorKind::Indeterminate,
                SqlType::Double,
                SqlType::Boolean,
            ),
            Arc::new(|args, _| {
                Ok(SqlValue::Boolean(is_indeterminate(nullable_double_at(args, 0)?)))
            }),
        );
    }

    fn register_hash(&mut self) {
        // Hashes are exposed as signed 64-bit values with the same bits
        self.register(
            OperatorSignature::unary(OperatorKind::HashCode, SqlType::Double, SqlType::Bigint),
            Arc::new(|args, _| Ok(SqlValue::Bigint(hash_code(double_at(args, 0)?) as i64))),
        );
        self.register(
            OperatorSignature::unary(OperatorKind::XxHash64, SqlType::Double, SqlType::Bigint),
            Arc::new(|args, _| Ok(SqlValue::Bigint(xx_hash_64(double_at(args, 0)?) as i64))),
        );
    }

    fn register_casts(&mut self) {
        let double = SqlType::Double;

        self.register(
            OperatorSignature::cast(double, SqlType::VARCHAR),
            Arc::new(|args, return_type| {
                Ok(SqlValue::Varchar(cast_to_varchar(double_at(args, 0)?, *return_type)?))
            }),
        );
        self.register(
            OperatorSignature::cast(double, SqlType::Bigint),
            Arc::new(|args, _| Ok(SqlValue::Bigint(cast_to_bigint(double_at(args, 0)?)?))),
        );
        self.register(
            OperatorSignature::cast(double, SqlType::Integer),
            Arc::new(|args, _| Ok(SqlValue::Integer(cast_to_integer(double_at(args, 0)?)?))),
        );
        self.register(
            OperatorSignature::cast(double, SqlType::Smallint),
            Arc::new(|args, _| Ok(SqlValue::Smallint(cast_to_smallint(double_at(args, 0)?)?))),
        );
        self.register(
            OperatorSignature::cast(double, SqlType::Tinyint),
            Arc::new(|args, _| Ok(SqlValue::Tinyint(cast_to_tinyint(double_at(args, 0)?)?))),
        );
        self.register(
            OperatorSignature::cast(double, SqlType::Boolean),
            Arc::new(|args, _| Ok(SqlValue::Boolean(cast_to_boolean(double_at(args, 0)?)))),
        );
        self.register(
            OperatorSignature::cast(double, SqlType::Real),
            Arc::new(|args, _| Ok(SqlValue::Real(cast_to_real(double_at(args, 0)?)))),
        );

        // Into DOUBLE
        self.register(
            OperatorSignature::cast(SqlType::VARCHAR, double),
            Arc::new(|args, _| {
                let text = value_at(args, 0, SqlType::VARCHAR, SqlValue::as_str)?;
                Ok(SqlValue::Double(cast_from_varchar(text)?))
            }),
        );
        self.register(
            OperatorSignature::cast(SqlType::Bigint, double),
            Arc::new(|args, _| {
                let value = value_at(args, 0, SqlType::Bigint, |v| match v {
                    SqlValue::Bigint(v) => Some(*v),
                    _ => None,
                })?;
                Ok(SqlValue::Double(cast_from_bigint(value)))
            }),
        );
        self.register(
            OperatorSignature::cast(SqlType::Integer, double),
            Arc::new(|args, _| {
                let value = value_at(args, 0, SqlType::Integer, |v| match v {
                    SqlValue::Integer(v) => Some(*v),
                    _ => None,
                })?;
                Ok(SqlValue::Double(cast_from_integer(value)))
            }),
        );
        self.register(
            OperatorSignature::cast(SqlType::Smallint, double),
            Arc::new(|args, _| {
                let value = value_at(args, 0, SqlType::Smallint, |v| match v {
                    SqlValue::Smallint(v) => Some(*v),
                    _ => None,
                })?;
                Ok(SqlValue::Double(cast_from_smallint(value)))
            }),
        );
        self.register(
            OperatorSignature::cast(SqlType::Tinyint, double),
            Arc::new(|args, _| {
                let value = value_at(args, 0, SqlType::Tinyint, |v| match v {
                    SqlValue::Tinyint(v) => Some(*v),
                    _ => None,
                })?;
                Ok(SqlValue::Double(cast_from_tinyint(value)))
            }),
        );
        self.register(
            OperatorSignature::cast(SqlType::Real, double),
            Arc::new(|args, _| {
                let value = value_at(args, 0, SqlType::Real, SqlValue::as_real)?;
                Ok(SqlValue::Double(cast_from_real(value)))
            }),
        );
        self.register(
            OperatorSignature::cast(SqlType::Boolean, double),
            Arc::new(|args, _| {
                let value = value_at(args, 0, SqlType::Boolean, SqlValue::as_boolean)?;
                Ok(SqlValue::Double(cast_from_boolean(value)))
            }),
        );

        // Saturated floor casts
        let saturated = |target: SqlType| {
            let kind = OperatorKind::SaturatedFloorCast { target };
            OperatorSignature::new(kind, vec![double], target)
        };
        self.register(
            saturated(SqlType::Bigint),
            Arc::new(|args, _| {
                let value = saturated_floor_cast_to_bigint(double_at(args, 0)?)?;
                Ok(SqlValue::Bigint(value))
            }),
        );
        self.register(
            saturated(SqlType::Integer),
            Arc::new(|args, _| {
                let value = saturated_floor_cast_to_integer(double_at(args, 0)?)?;
                Ok(SqlValue::Integer(value))
            }),
        );
        self.register(
            saturated(SqlType::Smallint),
            Arc::new(|args, _| {
                let value = saturated_floor_cast_to_smallint(double_at(args, 0)?)?;
                Ok(SqlValue::Smallint(value))
            }),
        );
        self.register(
            saturated(SqlType::Tinyint),
            Arc::new(|args, _| {
                let value = saturated_floor_cast_to_tinyint(double_at(args, 0)?)?;
                Ok(SqlValue::Tinyint(value))
            }),
        );
        self.register(
            saturated(SqlType::Real),
            Arc::new(|args, _| {
                let value = saturated_floor_cast_to_real(double_at(args, 0)?)?;
                Ok(SqlValue::Real(value))
            }),
        );
    }
}

/// Extract argument `index`, failing on a missing or mistyped value
fn value_at<'a, T>(
    args: &'a [SqlValue],
    index: usize,
    expected: SqlType,
    extract: impl FnOnce(&'a SqlValue) -> Option<T>,
) -> EvalResult<T> {
    let Some(value) = args.get(index) else {
        return Err(EvalError::argument_count(
            format!("{} operator", expected),
            index + 1,
            args.len(),
        ));
    };
    extract(value).ok_or_else(|| unexpected(expected, value))
}

/// Extract a non-null double argument
fn double_at(args: &[SqlValue], index: usize) -> EvalResult<f64> {
    value_at(args, index, SqlType::Double, SqlValue::as_double)
}

/// Extract a possibly-null double argument
fn nullable_double_at(args: &[SqlValue], index: usize) -> EvalResult<Option<f64>> {
    match args.get(index) {
        Some(SqlValue::Null) => Ok(None),
        _ => double_at(args, index).map(Some),
    }
}

fn unexpected(expected: SqlType, found: &SqlValue) -> EvalError {
    EvalError::type_mismatch(
        expected.to_string(),
        found.get_type().map_or_else(|| "null".to_string(), |t| t.to_string()),
    )
}
