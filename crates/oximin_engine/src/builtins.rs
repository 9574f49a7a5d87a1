//! Members of the ECMAScript built-in objects. Renaming any of these would
//! break calls into the runtime, so property mangling never touches them.

const BUILTIN_PROPERTIES: &[&str] = &[
    // Object
    "__proto__",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
    "assign",
    "constructor",
    "create",
    "defineProperties",
    "defineProperty",
    "entries",
    "freeze",
    "fromEntries",
    "getOwnPropertyDescriptor",
    "getOwnPropertyDescriptors",
    "getOwnPropertyNames",
    "getOwnPropertySymbols",
    "getPrototypeOf",
    "groupBy",
    "hasOwn",
    "hasOwnProperty",
    "is",
    "isExtensible",
    "isFrozen",
    "isPrototypeOf",
    "isSealed",
    "keys",
    "preventExtensions",
    "propertyIsEnumerable",
    "prototype",
    "seal",
    "setPrototypeOf",
    "toLocaleString",
    "toString",
    "valueOf",
    "values",
    // Function
    "apply",
    "arguments",
    "bind",
    "call",
    "caller",
    "length",
    "name",
    // Array
    "at",
    "concat",
    "copyWithin",
    "every",
    "fill",
    "filter",
    "find",
    "findIndex",
    "findLast",
    "findLastIndex",
    "flat",
    "flatMap",
    "forEach",
    "from",
    "includes",
    "indexOf",
    "isArray",
    "join",
    "lastIndexOf",
    "map",
    "of",
    "pop",
    "push",
    "reduce",
    "reduceRight",
    "reverse",
    "shift",
    "slice",
    "some",
    "sort",
    "splice",
    "toReversed",
    "toSorted",
    "toSpliced",
    "unshift",
    "with",
    // String
    "anchor",
    "charAt",
    "charCodeAt",
    "codePointAt",
    "endsWith",
    "fromCharCode",
    "fromCodePoint",
    "isWellFormed",
    "localeCompare",
    "match",
    "matchAll",
    "normalize",
    "padEnd",
    "padStart",
    "raw",
    "repeat",
    "replace",
    "replaceAll",
    "search",
    "split",
    "startsWith",
    "substr",
    "substring",
    "toLocaleLowerCase",
    "toLocaleUpperCase",
    "toLowerCase",
    "toUpperCase",
    "toWellFormed",
    "trim",
    "trimEnd",
    "trimLeft",
    "trimRight",
    "trimStart",
    // Number and Math
    "EPSILON",
    "MAX_SAFE_INTEGER",
    "MAX_VALUE",
    "MIN_SAFE_INTEGER",
    "MIN_VALUE",
    "NEGATIVE_INFINITY",
    "NaN",
    "POSITIVE_INFINITY",
    "isFinite",
    "isInteger",
    "isNaN",
    "isSafeInteger",
    "parseFloat",
    "parseInt",
    "toExponential",
    "toFixed",
    "toPrecision",
    "E",
    "LN10",
    "LN2",
    "LOG10E",
    "LOG2E",
    "PI",
    "SQRT1_2",
    "SQRT2",
    "abs",
    "acos",
    "acosh",
    "asin",
    "asinh",
    "atan",
    "atan2",
    "atanh",
    "cbrt",
    "ceil",
    "clz32",
    "cos",
    "cosh",
    "exp",
    "expm1",
    "floor",
    "fround",
    "hypot",
    "imul",
    "log",
    "log10",
    "log1p",
    "log2",
    "max",
    "min",
    "pow",
    "random",
    "round",
    "sign",
    "sin",
    "sinh",
    "sqrt",
    "tan",
    "tanh",
    "trunc",
    // Date
    "UTC",
    "getDate",
    "getDay",
    "getFullYear",
    "getHours",
    "getMilliseconds",
    "getMinutes",
    "getMonth",
    "getSeconds",
    "getTime",
    "getTimezoneOffset",
    "getUTCDate",
    "getUTCDay",
    "getUTCFullYear",
    "getUTCHours",
    "getUTCMilliseconds",
    "getUTCMinutes",
    "getUTCMonth",
    "getUTCSeconds",
    "getYear",
    "now",
    "parse",
    "setDate",
    "setFullYear",
    "setHours",
    "setMilliseconds",
    "setMinutes",
    "setMonth",
    "setSeconds",
    "setTime",
    "setUTCDate",
    "setUTCFullYear",
    "setUTCHours",
    "setUTCMilliseconds",
    "setUTCMinutes",
    "setUTCMonth",
    "setUTCSeconds",
    "setYear",
    "toDateString",
    "toISOString",
    "toJSON",
    "toLocaleDateString",
    "toLocaleTimeString",
    "toTimeString",
    "toUTCString",
    // RegExp
    "exec",
    "flags",
    "global",
    "ignoreCase",
    "lastIndex",
    "multiline",
    "source",
    "sticky",
    "test",
    "unicode",
    // Map, Set, WeakMap, WeakRef
    "add",
    "clear",
    "delete",
    "deref",
    "get",
    "has",
    "set",
    "size",
    // Promise
    "all",
    "allSettled",
    "any",
    "catch",
    "finally",
    "race",
    "reject",
    "resolve",
    "then",
    "withResolvers",
    // Iterators and generators
    "done",
    "next",
    "return",
    "throw",
    "value",
    // Symbol
    "asyncIterator",
    "description",
    "for",
    "hasInstance",
    "isConcatSpreadable",
    "iterator",
    "keyFor",
    "species",
    "toPrimitive",
    "toStringTag",
    "unscopables",
    // JSON and Reflect
    "construct",
    "deleteProperty",
    "ownKeys",
    "stringify",
    // Errors
    "cause",
    "captureStackTrace",
    "errors",
    "message",
    "stack",
    // Typed arrays and buffers
    "BYTES_PER_ELEMENT",
    "buffer",
    "byteLength",
    "byteOffset",
    "getFloat32",
    "getFloat64",
    "getInt16",
    "getInt32",
    "getInt8",
    "getUint16",
    "getUint32",
    "getUint8",
    "isView",
    "setFloat32",
    "setFloat64",
    "setInt16",
    "setInt32",
    "setInt8",
    "setUint16",
    "setUint32",
    "setUint8",
    "subarray",
    // Property descriptors and accessors
    "configurable",
    "enumerable",
    "writable",
    // console
    "debug",
    "error",
    "info",
    "table",
    "time",
    "timeEnd",
    "trace",
    "warn",
];

pub(crate) fn is_builtin_property(name: &str) -> bool {
    BUILTIN_PROPERTIES.contains(&name)
}
