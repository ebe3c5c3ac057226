//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use uuid::Uuid;
use wardrobe::models::{Article, Catalog, FixedData, NewArticle, OutfitHistory};
use wardrobe::services::{FixedDataService, WardrobeService};

/// Path to the wardrobe binary (set by cargo at compile time)
pub fn wardrobe_bin() -> &'static str {
    env!("CARGO_BIN_EXE_wardrobe")
}

/// Sample articles: (type, subtype, description, colors, weather, price).
pub const SAMPLE_ARTICLES: &[(&str, &str, &str, &[&str], &[&str], f64)] = &[
    ("hat", "beanie", "Grey wool beanie", &["gray"], &["cold"], 25.0),
    ("hat", "cap", "Navy baseball cap", &["navy"], &["any"], 15.0),
    ("shirt", "tee", "White cotton tee", &["white"], &["hot"], 10.0),
    ("shirt", "oxford", "Blue oxford shirt", &["blue"], &["normal"], 40.0),
    ("accessory", "watch", "Black steel watch", &["black"], &["any"], 120.0),
    ("accessory", "belt", "Brown leather belt", &["brown"], &["any"], 35.0),
    ("shoes", "boots", "Brown hiking boots", &["brown"], &["cold", "wet"], 140.0),
];

/// Isolated data directory with its own config directory.
pub struct Workspace {
    dir: TempDir,
    /// Article ids by description
    pub ids: BTreeMap<String, Uuid>,
}

impl Workspace {
    /// Starter fixed data and no wardrobe file.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("fixed.json"), FixedData::STARTER_JSON)
            .expect("Failed to write fixed data");
        Self {
            dir,
            ids: BTreeMap::new(),
        }
    }

    /// Starter fixed data and a wardrobe holding [`SAMPLE_ARTICLES`].
    pub fn with_sample_wardrobe() -> Self {
        let mut workspace = Self::empty();
        let fixed = workspace.fixed_data();
        let mut catalog = Catalog::new(&fixed);

        for (article_type, subtype, description, colors, weather, price) in SAMPLE_ARTICLES {
            let article = Article::new(NewArticle {
                article_type: (*article_type).to_string(),
                subtype: (*subtype).to_string(),
                description: (*description).to_string(),
                colors: colors.iter().map(|c| (*c).to_string()).collect(),
                weather: weather.iter().map(|w| (*w).to_string()).collect(),
                price: *price,
            })
            .expect("Sample article should be valid");
            let id = catalog.add_article(article).expect("Sample type exists").id();
            workspace.ids.insert((*description).to_string(), id);
        }

        WardrobeService::save(&workspace.data_path(), &catalog, &OutfitHistory::new())
            .expect("Failed to write wardrobe");
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn fixed_path(&self) -> PathBuf {
        self.dir.path().join("fixed.json")
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("wardrobe.json")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn fixed_data(&self) -> FixedData {
        FixedDataService::load(&self.fixed_path())
            .expect("Fixed data should load")
            .data
    }

    /// Command with the config dir isolated but no data flags.
    pub fn bare_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(wardrobe_bin());
        cmd.env("WARDROBE_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .current_dir(self.path())
            .args(args);
        cmd
    }

    /// Runs the binary against this workspace's data files.
    pub fn run(&self, args: &[&str]) -> Output {
        let data = self.data_path();
        let fixed = self.fixed_path();
        self.bare_command(args)
            .args(["--data", path_str(&data), "--fixed", path_str(&fixed)])
            .output()
            .expect("Failed to execute command")
    }

    /// Runs the binary and parses stdout as JSON, asserting success.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
    }

    /// The wardrobe document as raw JSON.
    pub fn wardrobe_json(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.data_path()).expect("Failed to read wardrobe");
        serde_json::from_str(&content).expect("Wardrobe should be JSON")
    }

    pub fn id(&self, description: &str) -> String {
        self.ids[description].to_string()
    }
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("Temp paths are UTF-8")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Ids of the articles an outfit JSON holds under `article_type`.
pub fn outfit_ids(outfit: &serde_json::Value, article_type: &str) -> Vec<String> {
    outfit[article_type]
        .as_array()
        .map(|articles| {
            articles
                .iter()
                .filter_map(|a| a["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
