//! Webpack configuration for bundling every module as a UMD library.

use std::path::{Path, PathBuf};

use ecat_codegen::merge::merge_layers;
use ecat_core::{GeneratedFile, read_text};
use ecat_manifest::ModuleConfig;
use eyre::{Result, WrapErr, bail};
use serde_json::{Map, Value, json};

/// File name of the merged configuration, written below the base path.
pub const BUILD_CONFIG_FILE: &str = "webpack.ecat.json";

/// Packages the host provides at runtime, with their global names.
const EXTERNALS: &[(&str, &str)] = &[
    ("vue", "Vue"),
    ("echarts", "echarts"),
    ("@element-plus/icons-vue", "ElementPlusIconsVue"),
    ("element-plus", "ElementPlus"),
];

/// The build configuration: base layer, then user layer, then framework
/// layer, combined with [`deep_merge`](ecat_codegen::merge::deep_merge).
#[derive(Debug, Clone)]
pub struct BuildConfig {
    base: PathBuf,
    public_path: String,
    modules: Vec<String>,
    user: Option<Value>,
}

impl BuildConfig {
    pub fn new(base: impl Into<PathBuf>, config: &ModuleConfig) -> Self {
        Self {
            base: base.into(),
            public_path: config.public_path.clone(),
            modules: config.sub_modules.iter().map(|m| m.module.clone()).collect(),
            user: None,
        }
    }

    /// Add user settings merged between the base and framework layers.
    pub fn with_user_config(mut self, user: Value) -> Self {
        self.user = Some(user);
        self
    }

    /// Read user settings from a JSON file. The document must be an object.
    pub fn load_user_config(path: &Path) -> Result<Value> {
        let content = read_text(path)?;
        let value: Value = serde_json::from_str(&content)
            .wrap_err_with(|| format!("invalid JSON in '{}'", path.display()))?;

        if !value.is_object() {
            bail!(
                "user build config '{}' must be a JSON object",
                path.display()
            );
        }
        Ok(value)
    }

    /// Entries, output, externals and defaults derived from the document.
    pub fn base_layer(&self) -> Value {
        let entry: Map<String, Value> = self
            .modules
            .iter()
            .map(|module| {
                let index = self.base.join(module).join(".index.js");
                (module.clone(), Value::String(index.display().to_string()))
            })
            .collect();

        let externals: Map<String, Value> = EXTERNALS
            .iter()
            .map(|(package, root)| {
                (
                    package.to_string(),
                    json!({
                        "root": root,
                        "commonjs": package,
                        "commonjs2": package,
                        "amd": package,
                    }),
                )
            })
            .collect();

        json!({
            "entry": entry,
            "output": {
                "path": self.base.join("dist").display().to_string(),
                "filename": "[name].js",
                "publicPath": self.public_path,
                "library": "__dynamicModule_[name]",
                "libraryTarget": "umd",
                "libraryExport": "default",
                "umdNamedDefine": true,
                "globalObject": "this",
            },
            "module": {},
            "plugins": [],
            "resolve": {
                "extensions": [".vue", ".js"],
            },
            "externals": externals,
            "optimization": {
                "splitChunks": false,
                "runtimeChunk": false,
            },
            "devtool": "source-map",
        })
    }

    /// Loaders every module needs. Regex tests are written as strings.
    pub fn framework_layer() -> Value {
        json!({
            "module": {
                "rules": [
                    { "test": "\\.vue$", "loader": "vue-loader" },
                    { "test": "\\.js$", "loader": "babel-loader", "exclude": "node_modules" },
                    { "test": "\\.(css|scss)$", "use": ["style-loader", "css-loader", "sass-loader"] },
                ]
            }
        })
    }

    /// The merged configuration.
    pub fn to_value(&self) -> Value {
        merge_layers([
            self.base_layer(),
            self.user.clone().unwrap_or_else(|| json!({})),
            Self::framework_layer(),
        ])
    }
}

impl GeneratedFile for BuildConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(BUILD_CONFIG_FILE)
    }

    fn render(&self) -> String {
        format!("{:#}\n", self.to_value())
    }
}
