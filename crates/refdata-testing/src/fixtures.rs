//! Sample datasets, written in the shape the upstream service returns.

use serde_json::{Value, json};

/// Department hierarchy mixing flat `parentId` and nested `parent` links.
///
/// ```text
/// HQ Head office
/// ├── FIN Finance
/// │   ├── ACC Accounting
/// │   └── TRE Treasury
/// └── IT Information technology
///     └── SUP IT support
/// BR1 Northern branch
/// ```
pub fn departments() -> Value {
    json!([
        {"id": "hq", "code": "HQ", "name": "Head office", "description": "Executive office"},
        {"id": "fin", "code": "FIN", "name": "Finance", "parentId": "hq"},
        {"id": "acc", "code": "ACC", "name": "Accounting",
         "parent": {"id": "fin", "code": "FIN", "name": "Finance"}},
        {"id": "tre", "code": "TRE", "name": "Treasury", "parentId": "fin"},
        {"id": "it", "code": "IT", "name": "Information technology", "parentId": "hq",
         "foundedDate": "2015-03-01T00:00:00.000+00:00", "displayOrder": "2"},
        {"id": "sup", "code": "SUP", "name": "IT support", "parentId": "it"},
        {"id": "br1", "code": "BR1", "name": "Northern branch"}
    ])
}

/// Two departments that name each other as parent.
pub fn cyclic_departments() -> Value {
    json!([
        {"id": "a", "code": "A", "name": "Alpha", "parentId": "b"},
        {"id": "b", "code": "B", "name": "Beta", "parentId": "a"}
    ])
}

/// Saved listing response rather than a bare array
pub fn countries_page() -> Value {
    json!({
        "content": [
            {"id": 1, "code": "VN", "name": "Viet Nam"},
            {"id": 2, "code": "LA", "name": "Laos"},
            {"id": 3, "code": "KH", "name": "Cambodia", "description": "Kingdom of Cambodia"}
        ],
        "totalElements": 3
    })
}
