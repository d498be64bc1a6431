use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gifdb_core::{EntryStore, GifStore, StoreOptions, StoreStatus};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gifdb", version, about = "bot の GIF データベースを操作する")]
struct Cli {
    /// JSON データベースファイルのパス
    #[arg(long, env = "GIFDB_PATH", default_value = "gifs.json", global = true)]
    db: PathBuf,

    /// インデント付き JSON で書く
    #[arg(long, global = true)]
    pretty: bool,

    /// ログを詳しくする（-v, -vv）
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 保存済みエントリを 1 行ずつ表示
    List,
    /// まだないエントリを追加
    Add {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// データベースの状態を JSON で表示
    Status,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info,gifdb_core=debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 各 value を追加し、結果を 1 行ずつ返す
fn add_values(store: &mut dyn EntryStore, values: &[String]) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(values.len());
    for value in values {
        let added = store
            .add(value)
            .with_context(|| format!("failed to add {value:?}"))?;
        let verb = if added { "added" } else { "exists" };
        lines.push(format!("{verb} {value}"));
    }
    Ok(lines)
}

/// 保存順のまま 1 エントリ 1 行
fn list_lines(store: &dyn EntryStore) -> Vec<String> {
    store.list().to_vec()
}

fn status_json(status: &StoreStatus) -> anyhow::Result<String> {
    serde_json::to_string_pretty(status).context("failed to encode status")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = StoreOptions { pretty: cli.pretty };
    info!(db = %cli.db.display(), pretty = cli.pretty, "opening gif database");
    let mut store = GifStore::open_with(&cli.db, options)
        .with_context(|| format!("failed to open {}", cli.db.display()))?;

    match cli.command {
        Command::List => {
            for line in list_lines(&store) {
                println!("{line}");
            }
        }
        Command::Add { values } => {
            for line in add_values(&mut store, &values)? {
                println!("{line}");
            }
        }
        Command::Status => {
            println!("{}", status_json(&store.status())?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifdb_core::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_db_flag() {
        let cli = Cli::try_parse_from(["gifdb", "--db", "x.json", "add", "a", "b"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("x.json"));
        assert!(matches!(cli.command, Command::Add { ref values } if values == &["a", "b"]));
    }

    #[test]
    fn add_requires_a_value() {
        assert!(Cli::try_parse_from(["gifdb", "add"]).is_err());
    }

    #[test]
    fn add_values_reports_each_outcome() {
        let mut store = InMemoryStore::with_entries(vec!["a".into()]);
        let values = vec!["a".to_string(), "b".to_string(), "b".to_string()];

        let lines = add_values(&mut store, &values).unwrap();

        assert_eq!(lines, vec!["exists a", "added b", "exists b"]);
        assert_eq!(store.list(), ["a", "b"]);
    }

    #[test]
    fn list_lines_keep_stored_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gifs.json");
        std::fs::write(&path, r#"["c.gif","a.gif","b.gif"]"#).unwrap();
        let mut store = GifStore::open(&path).unwrap();
        store.add("d.gif").unwrap();

        assert_eq!(list_lines(&store), vec!["c.gif", "a.gif", "b.gif", "d.gif"]);
    }

    #[test]
    fn list_lines_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = GifStore::open(dir.path().join("gifs.json")).unwrap();

        assert!(list_lines(&store).is_empty());
    }

    #[test]
    fn status_json_parses_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gifs.json");
        let mut store = GifStore::open(&path).unwrap();
        store.add("a").unwrap();
        store.add("b").unwrap();

        let json = status_json(&store.status()).unwrap();
        let status: StoreStatus = serde_json::from_str(&json).unwrap();

        assert_eq!(status.path, path.display().to_string());
        assert_eq!(status.entries, 2);
    }
}
