//! Lookup of compiled contract artifacts in the build output
//!
//! Artifacts follow the Hardhat layout, i.e.
//! `<artifacts>/contracts/<Source>.sol/<Contract>.json`, alongside `build-info/`
//! and per-contract `.dbg.json` files which are never contract artifacts.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::{json_abi::JsonAbi, primitives::Bytes, sol_types::SolConstructor};
use itertools::Itertools;
use serde::Deserialize;

use crate::{
    constants::{ARTIFACT_EXTENSION, BUILD_INFO_DIR, LIBRARY_PLACEHOLDER_MARKER},
    errors::ScriptError,
};

/// The subset of a compilation artifact needed to deploy a contract
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    /// The contract name
    contract_name: String,
    /// The path of the source file the contract is defined in
    #[serde(default)]
    source_name: String,
    /// The contract ABI
    abi: JsonAbi,
    /// The hex-encoded creation bytecode
    bytecode: String,
}

/// A compiled contract: its interface plus the bytecode to instantiate it
#[derive(Clone, Debug)]
pub struct Blueprint {
    /// The contract name
    pub name: String,
    /// The source file the contract was compiled from
    pub source: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl Blueprint {
    /// Look up the artifact of the named contract under `artifacts_dir`
    ///
    /// `contract` is either a bare contract name or a fully qualified
    /// `<source>:<name>`, e.g. `contracts/Token.sol:Token`, which picks one
    /// artifact when several sources define a contract of the same name.
    pub fn load(artifacts_dir: &Path, contract: &str) -> Result<Self, ScriptError> {
        let (source, name) = match contract.rsplit_once(':') {
            Some((source, name)) => (Some(source), name),
            None => (None, contract),
        };

        let path = find_artifact(artifacts_dir, source, name)?;
        let blueprint = Self::from_file(&path)?;
        if blueprint.name != name || source.is_some_and(|source| blueprint.source != source) {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} holds contract {}:{}, expected {}",
                path.display(),
                blueprint.source,
                blueprint.name,
                contract
            )));
        }

        Ok(blueprint)
    }

    /// Parse a single artifact file
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?;
        let artifact: ArtifactFile = serde_json::from_str(&contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        if artifact.bytecode.contains(LIBRARY_PLACEHOLDER_MARKER) {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has unlinked library references",
                artifact.contract_name
            )));
        }

        let bytecode = Bytes::from_str(&artifact.bytecode)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no bytecode, it is abstract or an interface",
                artifact.contract_name
            )));
        }

        Ok(Self {
            name: artifact.contract_name,
            source: artifact.source_name,
            abi: artifact.abi,
            bytecode,
        })
    }

    /// Check that the constructor takes parameters of exactly the given Solidity types
    pub fn check_constructor(&self, expected: &[&str]) -> Result<(), ScriptError> {
        let inputs = self
            .abi
            .constructor
            .as_ref()
            .map(|constructor| {
                constructor.inputs.iter().map(|param| param.ty.as_str()).collect_vec()
            })
            .unwrap_or_default();

        if inputs != expected {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} constructor takes ({}), expected ({})",
                self.name,
                inputs.join(", "),
                expected.join(", ")
            )));
        }

        Ok(())
    }

    /// The creation transaction's payload: bytecode followed by the encoded constructor arguments
    pub fn init_code<C: SolConstructor>(&self, args: &C) -> Bytes {
        [&self.bytecode[..], args.abi_encode().as_slice()].concat().into()
    }
}

/// Find the single artifact for the contract `name` under `artifacts_dir`
///
/// With a `source` the artifact is read from `<artifacts_dir>/<source>/<name>.json`
/// directly, otherwise the whole tree is searched.
fn find_artifact(
    artifacts_dir: &Path,
    source: Option<&str>,
    name: &str,
) -> Result<PathBuf, ScriptError> {
    if !artifacts_dir.is_dir() {
        return Err(ScriptError::ArtifactLookup(format!(
            "artifacts directory {} does not exist, compile the contracts first",
            artifacts_dir.display()
        )));
    }

    let file_name = format!("{name}.{ARTIFACT_EXTENSION}");
    if let Some(source) = source {
        let path = artifacts_dir.join(source).join(&file_name);
        if !path.is_file() {
            return Err(ScriptError::ArtifactLookup(format!(
                "no artifact for {}:{} in {}",
                source,
                name,
                artifacts_dir.display()
            )));
        }

        return Ok(path);
    }

    let mut matches = Vec::new();
    collect_artifacts(artifacts_dir, &file_name, &mut matches)
        .map_err(|e| ScriptError::ArtifactLookup(e.to_string()))?;
    matches.sort();

    match matches.len() {
        0 => Err(ScriptError::ArtifactLookup(format!(
            "no artifact for {} in {}",
            name,
            artifacts_dir.display()
        ))),
        1 => Ok(matches.remove(0)),
        _ => Err(ScriptError::ArtifactLookup(format!(
            "multiple artifacts for {}, use one of: {}",
            name,
            matches.iter().map(|path| qualified_name(artifacts_dir, path, name)).join(", ")
        ))),
    }
}

/// The `<source>:<name>` an artifact path is addressed by
fn qualified_name(artifacts_dir: &Path, path: &Path, name: &str) -> String {
    let source = path.parent().and_then(|dir| dir.strip_prefix(artifacts_dir).ok());
    match source {
        Some(source) => format!("{}:{}", source.display(), name),
        None => path.display().to_string(),
    }
}

/// Recursively collect the files named `file_name` under `dir`
///
/// Symlinked directories are not followed.
fn collect_artifacts(dir: &Path, file_name: &str, matches: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            if entry.file_name() == BUILD_INFO_DIR {
                continue;
            }
            collect_artifacts(&path, file_name, matches)?;
        } else if entry.file_name() == file_name {
            matches.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use alloy::primitives::{address, U256};
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::{constants::TOKEN_CONSTRUCTOR_TYPES, solidity::NonMintableToken};

    /// Creation bytecode used by the test artifacts
    pub(crate) const TEST_BYTECODE: &str = "0x6080604052348015600f57600080fd5b50";

    /// Build an artifact for a contract with the token constructor
    pub(crate) fn token_artifact(name: &str, bytecode: &str) -> serde_json::Value {
        let inputs = TOKEN_CONSTRUCTOR_TYPES
            .iter()
            .enumerate()
            .map(|(i, ty)| json!({ "internalType": ty, "name": format!("arg{i}"), "type": ty }))
            .collect_vec();

        json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": format!("contracts/{name}.sol"),
            "abi": [{ "inputs": inputs, "stateMutability": "nonpayable", "type": "constructor" }],
            "bytecode": bytecode,
            "deployedBytecode": "0x",
            "linkReferences": {},
            "deployedLinkReferences": {}
        })
    }

    /// Write an artifact into the Hardhat layout under `root`
    pub(crate) fn write_artifact(root: &Path, source: &str, artifact: &serde_json::Value) {
        let name = artifact["contractName"].as_str().unwrap();
        let dir = root.join("contracts").join(format!("{source}.sol"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.json")), artifact.to_string()).unwrap();
        fs::write(
            dir.join(format!("{name}.dbg.json")),
            json!({ "_format": "hh-sol-dbg-1", "buildInfo": "../../build-info/abc.json" })
                .to_string(),
        )
        .unwrap();
    }

    /// An artifacts directory holding only the token artifact
    pub(crate) fn token_artifacts_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let artifact = token_artifact("NonMintableToken", TEST_BYTECODE);
        write_artifact(dir.path(), "NonMintableToken", &artifact);
        fs::create_dir_all(dir.path().join("build-info")).unwrap();
        fs::write(dir.path().join("build-info").join("NonMintableToken.json"), "{}").unwrap();
        dir
    }

    #[test]
    fn test_load_token_artifact() {
        let dir = token_artifacts_dir();
        let blueprint = Blueprint::load(dir.path(), "NonMintableToken").unwrap();

        assert_eq!(blueprint.name, "NonMintableToken");
        assert_eq!(blueprint.source, "contracts/NonMintableToken.sol");
        assert_eq!(blueprint.bytecode, Bytes::from_str(TEST_BYTECODE).unwrap());
        blueprint.check_constructor(&TOKEN_CONSTRUCTOR_TYPES).unwrap();
    }

    #[test]
    fn test_missing_artifacts_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("artifacts");

        let err = Blueprint::load(&missing, "NonMintableToken").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLookup(_)));
    }

    #[test]
    fn test_missing_artifact() {
        let dir = token_artifacts_dir();

        let err = Blueprint::load(dir.path(), "MintableToken").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLookup(_)));
    }

    #[test]
    fn test_ambiguous_artifact() {
        let dir = token_artifacts_dir();
        let mut other = token_artifact("NonMintableToken", TEST_BYTECODE);
        other["sourceName"] = json!("contracts/Other.sol");
        write_artifact(dir.path(), "Other", &other);

        // The error names every candidate by its qualified name
        let err = Blueprint::load(dir.path(), "NonMintableToken").unwrap_err();
        let msg = match err {
            ScriptError::ArtifactLookup(msg) => msg,
            e => panic!("unexpected error: {e}"),
        };
        assert!(msg.contains("multiple artifacts"));
        assert!(msg.contains("contracts/NonMintableToken.sol:NonMintableToken"));
        assert!(msg.contains("contracts/Other.sol:NonMintableToken"));

        // Either candidate can then be picked by that name
        let blueprint =
            Blueprint::load(dir.path(), "contracts/Other.sol:NonMintableToken").unwrap();
        assert_eq!(blueprint.source, "contracts/Other.sol");

        let blueprint =
            Blueprint::load(dir.path(), "contracts/NonMintableToken.sol:NonMintableToken")
                .unwrap();
        assert_eq!(blueprint.source, "contracts/NonMintableToken.sol");
    }

    #[test]
    fn test_qualified_name_not_found() {
        let dir = token_artifacts_dir();

        let contract = "contracts/Missing.sol:NonMintableToken";
        let err = Blueprint::load(dir.path(), contract).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLookup(_)));
    }

    #[test]
    fn test_qualified_name_source_mismatch() {
        let dir = TempDir::new().unwrap();
        // Stored under one source but compiled from another
        let mut artifact = token_artifact("NonMintableToken", TEST_BYTECODE);
        artifact["sourceName"] = json!("contracts/Elsewhere.sol");
        write_artifact(dir.path(), "NonMintableToken", &artifact);

        let contract = "contracts/NonMintableToken.sol:NonMintableToken";
        let err = Blueprint::load(dir.path(), contract).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_is_not_followed() {
        let dir = token_artifacts_dir();
        let contracts = dir.path().join("contracts");
        std::os::unix::fs::symlink(&contracts, contracts.join("loop")).unwrap();

        let blueprint = Blueprint::load(dir.path(), "NonMintableToken").unwrap();
        assert_eq!(blueprint.name, "NonMintableToken");
    }

    #[test]
    fn test_abstract_contract() {
        let dir = TempDir::new().unwrap();
        write_artifact(dir.path(), "Base", &token_artifact("Base", "0x"));

        let err = Blueprint::load(dir.path(), "Base").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }

    #[test]
    fn test_unlinked_library() {
        let dir = TempDir::new().unwrap();
        let bytecode = "0x6080__$d2e5c1a4b0f3c8e9a7b6d5c4e3f2a1b0c9$__6040";
        write_artifact(dir.path(), "Linked", &token_artifact("Linked", bytecode));

        let err = Blueprint::load(dir.path(), "Linked").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(msg) if msg.contains("unlinked")));
    }

    #[test]
    fn test_malformed_artifact() {
        let dir = TempDir::new().unwrap();
        let artifact_dir = dir.path().join("contracts").join("Broken.sol");
        fs::create_dir_all(&artifact_dir).unwrap();
        fs::write(artifact_dir.join("Broken.json"), "{ not json").unwrap();

        let err = Blueprint::load(dir.path(), "Broken").unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }

    #[test]
    fn test_constructor_mismatch() {
        let dir = TempDir::new().unwrap();
        let mut artifact = token_artifact("Wrapped", TEST_BYTECODE);
        artifact["abi"] = json!([{
            "inputs": [{ "internalType": "address", "name": "underlying", "type": "address" }],
            "stateMutability": "nonpayable",
            "type": "constructor"
        }]);
        write_artifact(dir.path(), "Wrapped", &artifact);

        let blueprint = Blueprint::load(dir.path(), "Wrapped").unwrap();
        let err = blueprint.check_constructor(&TOKEN_CONSTRUCTOR_TYPES).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }

    #[test]
    fn test_init_code_appends_constructor_args() {
        let dir = token_artifacts_dir();
        let blueprint = Blueprint::load(dir.path(), "NonMintableToken").unwrap();

        let args = NonMintableToken::constructorCall {
            name: "AIHI".to_string(),
            symbol: "AIHI".to_string(),
            owner: address!("725615fb55fa22f6ee512836d6d394765809d940"),
            initialSupply: U256::from(1u8),
        };
        let init_code = blueprint.init_code(&args);

        assert!(init_code.starts_with(&blueprint.bytecode));
        assert_eq!(&init_code[blueprint.bytecode.len()..], args.abi_encode().as_slice());
    }
}
