//! End-to-end tests for Python client generation.
//!
//! Tests the complete workflow:
//! 1. Load component definitions and messages (zapgen-registry)
//! 2. Generate modules (zapgen-codegen)
//! 3. Write them into an output directory and check the result

use std::fs;
use tempfile::TempDir;
use zapgen_codegen::python::OPTIONAL_MESSAGE;
use zapgen_codegen::{GeneratorOptions, PythonGenerator};
use zapgen_core::{ApiRegistry, EmptyCatalog};
use zapgen_registry::{FileRegistry, PropertiesCatalog};

const DEFINITIONS: &str = r#"{
  "components": [
    {
      "prefix": "core",
      "views": [
        {"name": "version"},
        {"name": "urlsByUrlRegex", "parameters": [{"name": "urlRegex", "required": true}]}
      ],
      "actions": [
        {"name": "setMode", "parameters": [
          {"name": "Mode", "required": true},
          {"name": "Force"}
        ]}
      ],
      "others": [
        {"name": "fileDownload", "parameters": [{"name": "fileName", "required": true}]}
      ]
    },
    {
      "prefix": "ajaxSpider",
      "actions": [{"name": "stop"}]
    }
  ]
}"#;

const MESSAGES: &str = "\
core.api.view.version = Gets ZAP's version
core.api.action.setMode = Sets the mode, which may be one of [safe, protect, standard, attack]
";

fn generator(optional: bool) -> PythonGenerator<'static> {
    PythonGenerator::with_options(
        GeneratorOptions::new()
            .with_year(2024)
            .with_optional(optional),
    )
    .unwrap()
}

fn registry() -> FileRegistry {
    FileRegistry::from_json_str(DEFINITIONS, "zap-api.json").unwrap()
}

#[test]
fn test_full_module_output() {
    let temp = TempDir::new().unwrap();
    let messages = PropertiesCatalog::parse(MESSAGES);

    let written = generator(false)
        .generate_all_to(&registry(), &messages, temp.path())
        .unwrap();
    assert_eq!(written.len(), 2);

    let core = fs::read_to_string(temp.path().join("core.py")).unwrap();
    let expected = r#"# Zed Attack Proxy (ZAP) and its related class files.
#
# ZAP is an HTTP/HTTPS proxy for assessing web application security.
#
# Copyright 2024 the ZAP development team
#
# Licensed under the Apache License, Version 2.0 (the "License");
# you may not use this file except in compliance with the License.
# You may obtain a copy of the License at
#
#   http://www.apache.org/licenses/LICENSE-2.0
#
# Unless required by applicable law or agreed to in writing, software
# distributed under the License is distributed on an "AS IS" BASIS,
# WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
# See the License for the specific language governing permissions and
# limitations under the License.
"""
This file was automatically generated.
"""

import six


class core(object):

    def __init__(self, zap):
        self.zap = zap

    @property
    def version(self):
        """
        Gets ZAP's version
        """
        return six.next(six.itervalues(self.zap._request(self.zap.base + 'core/view/version/')))

    def urls_by_url_regex(self, urlregex):
        return six.next(six.itervalues(self.zap._request(self.zap.base + 'core/view/urlsByUrlRegex/', {'urlRegex': urlregex})))

    def set_mode(self, mode, force=None, apikey=''):
        """
        Sets the mode, which may be one of [safe, protect, standard, attack]
        """
        params = {'Mode': mode}
        if force is not None:
            params['Force'] = force
        return six.next(six.itervalues(self.zap._request(self.zap.base + 'core/action/setMode/', params)))

    def file_download(self, filename, apikey=''):
        return (self.zap._request_other(self.zap.base_other + 'core/other/fileDownload/', {'fileName': filename}))
"#;
    assert_eq!(core, expected);
}

#[test]
fn test_file_and_class_names() {
    let temp = TempDir::new().unwrap();

    generator(false)
        .generate_all_to(&registry(), &EmptyCatalog, temp.path())
        .unwrap();

    let spider = fs::read_to_string(temp.path().join("ajax_spider.py")).unwrap();
    assert!(spider.contains("class ajaxSpider(object):\n"));
    assert!(spider.contains(
        "    def stop(self, apikey=''):\n        return six.next(six.itervalues(self.zap._request(self.zap.base + 'ajaxSpider/action/stop/', {})))\n"
    ));
}

#[test]
fn test_missing_output_dir_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("zap-api-python/src/zapv2");

    let err = generator(false)
        .generate_all_to(&registry(), &EmptyCatalog, &missing)
        .unwrap_err();

    assert!(err.is_output_dir_missing());
    assert_eq!(
        err.to_string(),
        format!("The directory does not exist: {}", missing.display())
    );
    assert!(!missing.exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_optional_component_docstrings() {
    let messages = PropertiesCatalog::parse(MESSAGES);
    let code = generator(true).generate_all(&registry(), &messages).unwrap();

    let core = code.file("core.py").unwrap();
    assert!(core.content.contains(&format!(
        "        \"\"\"\n        Gets ZAP's version\n        {OPTIONAL_MESSAGE}\n        \"\"\"\n"
    )));
    assert!(core.content.contains(&format!(
        "    def file_download(self, filename, apikey=''):\n        \"\"\"\n        {OPTIONAL_MESSAGE}\n        \"\"\"\n"
    )));
}

#[test]
fn test_generated_names_contain_no_periods() {
    let json = r#"{"components": [{"prefix": "pscan", "views": [
        {"name": "option.MaxDepth"},
        {"name": "scanners.Enabled"}
    ]}]}"#;
    let registry = FileRegistry::from_json_str(json, "inline").unwrap();
    let code = generator(false).generate_all(&registry, &EmptyCatalog).unwrap();
    let content = &code.file("pscan.py").unwrap().content;

    for line in content.lines().filter(|l| l.trim_start().starts_with("def ")) {
        let name = line.trim_start().trim_start_matches("def ");
        let name = &name[..name.find('(').unwrap()];
        assert!(!name.contains('.'), "function name {name} contains a period");
    }
    assert!(content.contains("    def option__max_depth(self):\n"));
    assert!(content.contains("    def scanners__enabled(self):\n"));
    assert!(content.contains("'pscan/view/option.MaxDepth/'"));
}

#[test]
fn test_regeneration_overwrites_previous_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("core.py"), "stale").unwrap();

    generator(false)
        .generate_all_to(&registry(), &EmptyCatalog, temp.path())
        .unwrap();

    let core = fs::read_to_string(temp.path().join("core.py")).unwrap();
    assert!(core.starts_with("# Zed Attack Proxy (ZAP)"));
}

#[test]
fn test_generate_to_writes_single_component() {
    let temp = TempDir::new().unwrap();
    let registry = registry();
    let spider = &registry.components()[1];

    let path = generator(false)
        .generate_to(spider, &EmptyCatalog, temp.path())
        .unwrap();

    assert_eq!(path, temp.path().join("ajax_spider.py"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    let module = fs::read_to_string(&path).unwrap();
    assert!(module.contains("class ajaxSpider(object):\n"));
    assert!(module.contains("    def stop(self, apikey=''):\n"));
}

#[test]
fn test_generate_to_refuses_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("zapv2");
    let registry = registry();

    let err = generator(false)
        .generate_to(&registry.components()[0], &EmptyCatalog, &missing)
        .unwrap_err();

    assert!(err.is_output_dir_missing());
    assert!(!missing.exists());
}
