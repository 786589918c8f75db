//! CRUD wrappers
//!
//! Typed wrappers around the untyped fetch and list calls of the runtime
//! schema handle. Each wrapper asserts the returned values to the resource
//! type.

/// Flavor of a wrapper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CrudParams {
    /// Return the raw struct instead of the interface
    pub raw: bool,
    /// Lock the fetched rows under a lock policy
    pub lock: bool,
    /// Fetch by filter instead of by id; ignored by lists
    pub filter: bool,
}

impl CrudParams {
    /// Every fetch flavor with the given `raw`, lock-free first
    #[must_use]
    pub fn fetches(raw: bool, lock: bool) -> [Self; 2] {
        [false, true].map(|filter| Self { raw, lock, filter })
    }

    fn lock_prefix(self) -> &'static str {
        if self.lock {
            "Lock"
        } else {
            ""
        }
    }

    fn raw_suffix(self) -> &'static str {
        if self.raw {
            "Raw"
        } else {
            ""
        }
    }

    fn lock_argument(self) -> &'static str {
        if self.lock {
            ", policy"
        } else {
            ""
        }
    }

    fn lock_parameter(self, runtime: &str) -> String {
        if self.lock {
            format!(", policy {runtime}.LockPolicy")
        } else {
            String::new()
        }
    }
}

/// Fetch wrapper returning one `type_name`
#[must_use]
pub fn render_fetch(runtime: &str, name: &str, type_name: &str, params: CrudParams) -> String {
    let lock = params.lock_prefix();
    let raw = params.raw_suffix();
    let (filter, key, key_parameter) = if params.filter {
        ("Filter", "filter", format!("filter {runtime}.Filter"))
    } else {
        ("", "id", "id string".to_string())
    };
    let argument = params.lock_argument();
    let parameter = params.lock_parameter(runtime);

    format!(
        "func {lock}Fetch{filter}{raw}{name}(schema {runtime}.ISchema, {key_parameter}, context {runtime}.Context{parameter}) ({type_name}, error) {{
\tresult, err := schema.{lock}Fetch{filter}{raw}({key}, context{argument})
\tif err != nil {{
\t\treturn nil, err
\t}}
\treturn result.({type_name}), nil
}}
"
    )
}

/// List wrapper returning a slice of `type_name`
#[must_use]
pub fn render_list(runtime: &str, name: &str, type_name: &str, params: CrudParams) -> String {
    let lock = params.lock_prefix();
    let raw = params.raw_suffix();
    let argument = params.lock_argument();
    let parameter = params.lock_parameter(runtime);

    format!(
        "func {lock}List{raw}{name}(schema {runtime}.ISchema, filter {runtime}.Filter, paginator *{runtime}.Paginator, context {runtime}.Context{parameter}) ([]{type_name}, error) {{
\tlist, err := schema.{lock}List{raw}(filter, paginator, context{argument})
\tif err != nil {{
\t\treturn nil, err
\t}}
\tresult := make([]{type_name}, len(list))
\tfor i, object := range list {{
\t\tresult[i] = object.({type_name})
\t}}
\treturn result, nil
}}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_fetch() {
        let expected = "func FetchA(schema goext.ISchema, id string, context goext.Context) (esi.IA, error) {
\tresult, err := schema.Fetch(id, context)
\tif err != nil {
\t\treturn nil, err
\t}
\treturn result.(esi.IA), nil
}
";
        assert_eq!(render_fetch("goext", "A", "esi.IA", CrudParams::default()), expected);
    }

    #[test]
    fn lock_fetch_raw() {
        let expected = "func LockFetchRawB(schema goext.ISchema, id string, context goext.Context, policy goext.LockPolicy) (*resources.B, error) {
\tresult, err := schema.LockFetchRaw(id, context, policy)
\tif err != nil {
\t\treturn nil, err
\t}
\treturn result.(*resources.B), nil
}
";
        let params = CrudParams {
            raw: true,
            lock: true,
            filter: false,
        };
        assert_eq!(render_fetch("goext", "B", "*resources.B", params), expected);
    }

    #[test]
    fn lock_fetch_filter_raw() {
        let expected = "func LockFetchFilterRawB(schema goext.ISchema, filter goext.Filter, context goext.Context, policy goext.LockPolicy) (*resources.B, error) {
\tresult, err := schema.LockFetchFilterRaw(filter, context, policy)
\tif err != nil {
\t\treturn nil, err
\t}
\treturn result.(*resources.B), nil
}
";
        let params = CrudParams {
            raw: true,
            lock: true,
            filter: true,
        };
        assert_eq!(render_fetch("goext", "B", "*resources.B", params), expected);
    }

    #[test]
    fn plain_list() {
        let expected = "func ListA(schema goext.ISchema, filter goext.Filter, paginator *goext.Paginator, context goext.Context) ([]esi.IA, error) {
\tlist, err := schema.List(filter, paginator, context)
\tif err != nil {
\t\treturn nil, err
\t}
\tresult := make([]esi.IA, len(list))
\tfor i, object := range list {
\t\tresult[i] = object.(esi.IA)
\t}
\treturn result, nil
}
";
        assert_eq!(render_list("goext", "A", "esi.IA", CrudParams::default()), expected);
    }

    #[test]
    fn lock_list_raw() {
        let expected = "func LockListRawB(schema goext.ISchema, filter goext.Filter, paginator *goext.Paginator, context goext.Context, policy goext.LockPolicy) ([]*resources.B, error) {
\tlist, err := schema.LockListRaw(filter, paginator, context, policy)
\tif err != nil {
\t\treturn nil, err
\t}
\tresult := make([]*resources.B, len(list))
\tfor i, object := range list {
\t\tresult[i] = object.(*resources.B)
\t}
\treturn result, nil
}
";
        let params = CrudParams {
            raw: true,
            lock: true,
            filter: false,
        };
        assert_eq!(render_list("goext", "B", "*resources.B", params), expected);
    }

    #[test]
    fn list_ignores_filter_flag() {
        let params = CrudParams {
            filter: true,
            ..CrudParams::default()
        };
        assert_eq!(
            render_list("goext", "A", "esi.IA", params),
            render_list("goext", "A", "esi.IA", CrudParams::default())
        );
    }

    #[test]
    fn fetch_flavors() {
        let [by_id, by_filter] = CrudParams::fetches(true, false);
        assert!(by_id.raw && !by_id.filter);
        assert!(by_filter.raw && by_filter.filter);
    }
}
