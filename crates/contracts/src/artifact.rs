//! Compiled contract artifacts (hardhat-zksync `artifacts-zk` output)
//!
//! All artifacts of a directory are loaded once into an [ArtifactRegistry](ArtifactRegistry)
//! and looked up by contract name afterwards.

use crate::error::ClientError;
use ethers::{
    abi::{Abi, Token},
    types::{Bytes, H256},
};
use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};
use tracing::{debug, warn};
use zkaa_primitives::{hash_bytecode, BytecodeError};

/// Artifact JSON as written by the zksolc hardhat plugin
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactJson {
    contract_name: String,
    #[serde(default)]
    source_name: Option<String>,
    abi: Abi,
    bytecode: Bytes,
    /// bytecode hash -> fully qualified name (`path/Contract.sol:Contract`)
    #[serde(default)]
    factory_deps: HashMap<String, String>,
}

/// Compiled contract
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    /// Contract name
    pub name: String,
    /// Source file the contract was compiled from
    pub source_name: Option<String>,
    pub abi: Abi,
    pub bytecode: Bytes,
    /// Bytecodes of the contracts this contract deploys (resolved recursively)
    pub factory_deps: Vec<Bytes>,
}

impl Artifact {
    /// Versioned bytecode hash of the contract
    pub fn bytecode_hash(&self) -> Result<H256, BytecodeError> {
        hash_bytecode(&self.bytecode)
    }

    /// ABI encoded constructor arguments (without bytecode)
    pub fn encode_constructor(&self, args: &[Token]) -> Result<Bytes, ClientError> {
        match self.abi.constructor() {
            Some(constructor) => constructor
                .encode_input(vec![], args)
                .map(Bytes::from)
                .map_err(|err| ClientError::Abi { inner: err.to_string() }),
            None if args.is_empty() => Ok(Bytes::default()),
            None => Err(ClientError::Abi {
                inner: format!(
                    "{} has no constructor, but {} args were given",
                    self.name,
                    args.len()
                ),
            }),
        }
    }
}

/// Contract name from a fully qualified name (`contracts/AAFactory.sol:AAFactory`)
fn contract_name(fully_qualified_name: &str) -> &str {
    fully_qualified_name.rsplit(':').next().unwrap_or(fully_qualified_name)
}

/// Artifacts loaded by contract name
#[derive(Clone, Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: HashMap<String, Artifact>,
}

impl ArtifactRegistry {
    /// Loads all artifacts found in the directory (recursively)
    ///
    /// Debug files (`*.dbg.json`) and `build-info` are skipped. Factory dependencies of every
    /// artifact are resolved against the loaded artifacts.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ClientError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ClientError::Artifact {
                inner: format!("{} is not a directory", dir.display()),
            });
        }

        let pattern = format!("{}/**/*.json", dir.display());
        let paths = glob::glob(&pattern)
            .map_err(|err| ClientError::Artifact { inner: err.to_string() })?
            .filter_map(Result::ok)
            .filter(|path| {
                !path.to_string_lossy().ends_with(".dbg.json") &&
                    !path.components().any(|c| c.as_os_str() == "build-info")
            });

        let mut parsed = HashMap::new();
        for path in paths {
            let content = fs::read_to_string(&path).map_err(|err| ClientError::Artifact {
                inner: format!("{}: {err}", path.display()),
            })?;
            let json: ArtifactJson = serde_json::from_str(&content).map_err(|err| {
                ClientError::Artifact { inner: format!("{}: {err}", path.display()) }
            })?;

            if parsed.contains_key(&json.contract_name) {
                warn!("Duplicate artifact {} in {}, skipping", json.contract_name, path.display());
                continue;
            }
            debug!("Loaded artifact {} from {}", json.contract_name, path.display());
            parsed.insert(json.contract_name.clone(), json);
        }

        let mut artifacts = HashMap::new();
        for (name, json) in parsed.iter() {
            let mut visited = HashSet::from([name.clone()]);
            let mut factory_deps = vec![];
            Self::collect_factory_deps(&parsed, json, &mut visited, &mut factory_deps)?;

            artifacts.insert(
                name.clone(),
                Artifact {
                    name: name.clone(),
                    source_name: json.source_name.clone(),
                    abi: json.abi.clone(),
                    bytecode: json.bytecode.clone(),
                    factory_deps,
                },
            );
        }

        Ok(Self { artifacts })
    }

    fn collect_factory_deps(
        parsed: &HashMap<String, ArtifactJson>,
        json: &ArtifactJson,
        visited: &mut HashSet<String>,
        factory_deps: &mut Vec<Bytes>,
    ) -> Result<(), ClientError> {
        let mut names = json.factory_deps.values().map(|n| contract_name(n)).collect::<Vec<_>>();
        names.sort_unstable();

        for name in names {
            if !visited.insert(name.to_string()) {
                continue;
            }
            let dep = parsed.get(name).ok_or_else(|| ClientError::Artifact {
                inner: format!(
                    "factory dependency {name} of {} is not loaded",
                    json.contract_name
                ),
            })?;
            factory_deps.push(dep.bytecode.clone());
            Self::collect_factory_deps(parsed, dep, visited, factory_deps)?;
        }

        Ok(())
    }

    /// Adds (or replaces) an artifact
    pub fn insert(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.name.clone(), artifact);
    }

    pub fn get(&self, name: &str) -> Result<&Artifact, ClientError> {
        self.artifacts.get(name).ok_or_else(|| ClientError::ArtifactNotFound(name.into()))
    }

    /// Names of all loaded artifacts (sorted)
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.artifacts.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
