//! Test fixtures
//!
//! Registry response bodies for integration tests.

use apb_registry_core::Spec;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

/// A spec document as an APB author would write it
pub const FOO_SPEC_YAML: &str = r#"
id: 1dda1477cace09730bd8ed7a6505607e
name: foo
image: example/foo-apb
description: Foo playbook bundle
tags:
  - database
bindable: true
async: optional
metadata:
  displayName: Foo (APB)
parameters:
  - name: foo_password
    title: Foo password
    type: string
    maxlength: 32
    required: true
  - name: foo_replicas
    type: int
    default: 1
"#;

/// The spec expected from [`FOO_SPEC_YAML`]
pub fn foo_spec() -> Spec {
    serde_yaml::from_str(FOO_SPEC_YAML).expect("fixture spec is valid YAML")
}

/// Base64 label value for a YAML document
pub fn encode_label(document: &str) -> String {
    STANDARD.encode(document)
}

/// Search response body
pub fn search_body(num_results: usize, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "description": format!("{} image", name),
                "is_official": false,
                "is_trusted": true,
                "should_filter": false,
                "star_count": 0
            })
        })
        .collect();

    json!({
        "num_results": num_results,
        "query": "\"*-apb\"",
        "results": results
    })
}

/// Schema 1 manifest body whose first history entry carries `labels`
pub fn manifest_with_labels(labels: Value) -> Value {
    let v1_compatibility = json!({
        "id": "b0d1b1b3",
        "created": "2017-05-01T00:00:00Z",
        "config": {
            "Hostname": "",
            "Labels": labels
        }
    });

    json!({
        "schemaVersion": 1,
        "name": "example/image",
        "tag": "latest",
        "architecture": "amd64",
        "fsLayers": [{ "blobSum": "sha256:a3ed95caeb02ffe68cdd9fd84406680ae93d633cb16422d00e8a7c22955b46d4" }],
        "history": [
            { "v1Compatibility": v1_compatibility.to_string() },
            { "v1Compatibility": "{\"id\":\"parent\"}" }
        ]
    })
}

/// Schema 1 manifest carrying an encoded spec label
pub fn manifest_with_spec(document: &str) -> Value {
    manifest_with_labels(json!({
        "com.redhat.apb.spec": encode_label(document),
        "com.redhat.apb.version": "0.1.0"
    }))
}

/// Schema 2 manifest: no history field at all
pub fn schema2_manifest() -> Value {
    json!({
        "schemaVersion": 2,
        "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
        "config": {
            "mediaType": "application/vnd.docker.container.image.v1+json",
            "size": 1512,
            "digest": "sha256:5b0d59026729b68570d99bc4f3f7c31a2e4f2a5736435641565d93e7c25bd2c3"
        },
        "layers": []
    })
}
