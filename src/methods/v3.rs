//! lodash 3.x method tables.

use super::ProfileTable;

pub(super) const TABLE: ProfileTable = ProfileTable {
    aliases: &[
        ("forEach", &["each"]),
        ("assign", &["extend"]),
        ("first", &["head"]),
        ("zipObject", &["object"]),
        ("rest", &["tail"]),
        ("uniq", &["unique"]),
        ("reduce", &["foldl", "inject"]),
        ("reduceRight", &["foldr"]),
        ("some", &["any"]),
        ("map", &["collect"]),
        ("includes", &["contains", "include"]),
        ("flowRight", &["backflow", "compose"]),
        ("isEqual", &["eq"]),
        ("every", &["all"]),
        ("find", &["detect"]),
        ("forEachRight", &["eachRight"]),
        ("filter", &["select"]),
        ("functions", &["methods"]),
        ("callback", &["iteratee"]),
    ],
    wrapper: &[
        "concat", "join", "pop", "push", "reverse", "shift", "slice", "sort", "splice",
        "unshift", "replace", "split",
    ],
    wrapper_value_aliases: &["run", "toJSON", "valueOf"],
    shorthand: &[
        "dropRightWhile", "dropWhile", "findIndex", "findLastIndex", "remove", "sortedIndex",
        "sortedLastIndex", "map", "takeRightWhile", "takeWhile", "uniq", "countBy", "every",
        "filter", "find", "result", "groupBy", "indexBy", "partition", "reject", "some",
        "sortBy", "sortByOrder", "max", "min", "sum", "findKey", "findLastKey", "mapValues",
    ],
    chainable: &[
        "after", "ary", "assign", "at", "before", "bind", "bindAll", "bindKey", "callback",
        "chain", "chunk", "commit", "compact", "concat", "constant", "countBy", "create",
        "curry", "debounce", "defaults", "defaultsDeep", "defer", "delay", "difference",
        "drop", "dropRight", "dropRightWhile", "dropWhile", "fill", "filter", "flatten",
        "flattenDeep", "flow", "flowRight", "forEach", "forEachRight", "forIn", "forInRight",
        "forOwn", "forOwnRight", "functions", "groupBy", "indexBy", "initial", "intersection",
        "invert", "invoke", "keys", "keysIn", "map", "mapKeys", "mapValues", "matches",
        "matchesProperty", "memoize", "merge", "method", "methodOf", "mixin", "modArgs",
        "negate", "omit", "once", "pairs", "partial", "partialRight", "partition", "pick",
        "plant", "pluck", "property", "propertyOf", "pull", "pullAt", "push", "range", "rearg",
        "reject", "remove", "rest", "restParam", "reverse", "set", "shuffle", "slice", "sort",
        "sortBy", "sortByAll", "sortByOrder", "splice", "spread", "take", "takeRight",
        "takeRightWhile", "takeWhile", "tap", "throttle", "thru", "times", "toArray",
        "toPlainObject", "transform", "union", "uniq", "unshift", "unzip", "unzipWith",
        "values", "valuesIn", "where", "without", "wrap", "xor", "zip", "zipObject", "zipWith",
    ],
    iteratee: &[
        "dropRightWhile", "dropWhile", "findIndex", "findLastIndex", "remove", "sortedIndex",
        "sortedLastIndex", "takeRightWhile", "takeWhile", "uniq", "unzipWith", "zipWith",
        "tap", "thru", "countBy", "every", "filter", "find", "findLast", "forEach",
        "forEachRight", "groupBy", "indexBy", "map", "partition", "reduce", "reduceRight",
        "reject", "some", "sortBy", "max", "min", "sum", "findKey", "findLastKey", "forIn",
        "forInRight", "forOwn", "forOwnRight", "mapKeys", "mapValues", "transform", "times",
    ],
    // 3.x iteratees are followed by `thisArg`, so the last formal slot is rarely the iteratee.
    iteratee_index: &[
        ("sortedIndex", 2), ("sortedLastIndex", 2), ("dropRightWhile", 1), ("dropWhile", 1),
        ("findIndex", 1), ("findLastIndex", 1), ("remove", 1), ("takeRightWhile", 1),
        ("takeWhile", 1), ("uniq", 1), ("unzipWith", 1), ("tap", 1), ("thru", 1),
        ("countBy", 1), ("every", 1), ("filter", 1), ("find", 1), ("findLast", 1),
        ("forEach", 1), ("forEachRight", 1), ("groupBy", 1), ("indexBy", 1), ("map", 1),
        ("partition", 1), ("reduce", 1), ("reduceRight", 1), ("reject", 1), ("some", 1),
        ("sortBy", 1), ("max", 1), ("min", 1), ("sum", 1), ("findKey", 1), ("findLastKey", 1),
        ("forIn", 1), ("forInRight", 1), ("forOwn", 1), ("forOwnRight", 1), ("mapKeys", 1),
        ("mapValues", 1), ("transform", 1), ("times", 1),
    ],
    arg_counts: &[
        ("chunk", 2), ("compact", 1), ("drop", 2), ("dropRight", 2), ("dropRightWhile", 3),
        ("dropWhile", 3), ("fill", 4), ("findIndex", 3), ("findLastIndex", 3), ("first", 1),
        ("flatten", 2), ("flattenDeep", 1), ("fromIndex", 3), ("initial", 1), ("last", 1),
        ("lastIndexOf", 3), ("remove", 3), ("rest", 1), ("slice", 3), ("sortedIndex", 4),
        ("sortedLastIndex", 4), ("take", 2), ("takeRight", 2), ("takeRightWhile", 3),
        ("takeWhile", 3), ("uniq", 4), ("unzip", 1), ("unzipWith", 3), ("zipObject", 2),
        ("tap", 3), ("thru", 3), ("countBy", 3), ("every", 3), ("filter", 3), ("find", 3),
        ("findLast", 3), ("findWhere", 2), ("forEach", 3), ("forEachRight", 3), ("groupBy", 3),
        ("includes", 3), ("indexBy", 3), ("map", 3), ("partition", 3), ("pluck", 2),
        ("reduce", 4), ("reduceRight", 4), ("reject", 3), ("sample", 2), ("shuffle", 1),
        ("size", 1), ("some", 3), ("sortBy", 3), ("where", 2), ("after", 2), ("ary", 2),
        ("before", 2), ("curry", 2), ("curryRight", 2), ("debounce", 3), ("memoize", 2),
        ("negate", 1), ("once", 1), ("restParam", 2), ("spread", 1), ("throttle", 3),
        ("wrap", 2), ("clone", 4), ("cloneDeep", 3), ("gt", 2), ("gte", 2), ("isArguments", 1),
        ("isArray", 1), ("isBoolean", 1), ("isDate", 1), ("isElement", 1), ("isEmpty", 1),
        ("isEqual", 4), ("isError", 1), ("isFinite", 1), ("isFunction", 1), ("isMatch", 4),
        ("isNaN", 1), ("isNative", 1), ("isNull", 1), ("isNumber", 1), ("isObject", 1),
        ("isPlainObject", 1), ("isRegExp", 1), ("isTypedArray", 1), ("isUndefined", 1),
        ("lt", 2), ("lte", 2), ("toArray", 1), ("toPlainObject", 1), ("add", 2), ("ceil", 2),
        ("floor", 2), ("max", 3), ("min", 3), ("round", 2), ("sum", 3), ("inRange", 3),
        ("random", 3), ("create", 2), ("findKey", 3), ("findLastKey", 3), ("forIn", 3),
        ("forInRight", 3), ("forOwn", 3), ("forOwnRight", 3), ("functions", 1), ("get", 3),
        ("has", 2), ("invert", 2), ("keys", 1), ("keysIn", 1), ("mapKeys", 3),
        ("mapValues", 3), ("pairs", 1), ("result", 3), ("set", 3), ("transform", 4),
        ("values", 1), ("valuesIn", 1), ("camelCase", 1), ("capitalize", 1), ("deburr", 1),
        ("endsWith", 3), ("escape", 1), ("escapeRegExp", 1), ("kebabCase", 1), ("pad", 3),
        ("padLeft", 3), ("padRight", 3), ("parseInt", 2), ("repeat", 2), ("snakeCase", 2),
        ("startCase", 2), ("startsWith", 3), ("template", 2), ("trim", 2), ("trimLeft", 2),
        ("trimRight", 2), ("trunc", 3), ("unescape", 1), ("words", 2), ("attempt", 1),
        ("callback", 2), ("constant", 1), ("identity", 1), ("matches", 1),
        ("matchesProperty", 2), ("mixin", 3), ("noConflict", 0), ("noop", 0), ("property", 1),
        ("propertyOf", 1), ("range", 3), ("runInContext", 1), ("times", 3), ("uniqueId", 1),
    ],
    collection: &[
        "at", "countBy", "every", "filter", "find", "findLast", "findWhere", "groupBy",
        "includes", "indexBy", "invoke", "map", "partition", "pluck", "reduce", "reduceRight",
        "reject", "sample", "shuffle", "size", "some", "sortBy", "sortByAll", "sortByOrder",
        "where",
    ],
    side_effect_iteration: &[
        "forEach", "forEachRight", "forIn", "forInRight", "forOwn", "forOwnRight",
    ],
};
