use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use chaos_downloader::{
    download::{list_entries, process_entry},
    run_pipeline, ChaosClient, Config, Error, IndexEntry, Selection,
};
use serde_json::json;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::FileOptions;
use zip::ZipWriter;

fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

struct Workspace {
    dir: TempDir,
    config: Config,
}

impl Workspace {
    fn new(server: &MockServer) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("scratch");
        fs::create_dir_all(&scratch).unwrap();

        let mut config = Config::default();
        config.source.index_url = format!("{}/index.json", server.uri());
        config.output.base_directory = dir.path().join("AllChaosData");
        config.output.combined_file = dir.path().join("everything.txt");
        config.options.show_progress = false;
        config.options.temp_directory = Some(scratch);

        Self { dir, config }
    }

    fn base(&self) -> &Path {
        &self.config.output.base_directory
    }

    fn scratch(&self) -> PathBuf {
        self.dir.path().join("scratch")
    }

    fn combined(&self) -> String {
        fs::read_to_string(&self.config.output.combined_file).unwrap()
    }

    fn subdirectories(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.base())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

async fn mount_index(server: &MockServer, entries: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .mount(server)
        .await;
}

async fn mount_archive(server: &MockServer, route: &str, files: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(zip_bytes(files)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn pipeline_processes_only_selected_entries() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([
            {"name": "Tesla", "URL": format!("{uri}/tesla.zip")},
            {"name": "Google", "URL": format!("{uri}/google.zip")},
            {"name": "Uber", "URL": format!("{uri}/uber.zip")},
        ]),
    )
    .await;
    mount_archive(&server, "/tesla.zip", &[("tesla.com.txt", "a.tesla.com")]).await;
    mount_archive(&server, "/google.zip", &[("google.com.txt", "a.google.com")]).await;
    mount_archive(&server, "/uber.zip", &[("uber.com.txt", "a.uber.com")]).await;

    let workspace = Workspace::new(&server);
    let selection = Selection::from_list("TESLA, uber, airbnb");

    let report = run_pipeline(&workspace.config, &selection).await.unwrap();

    assert_eq!(report.download.selected, 2);
    assert_eq!(report.download.completed, 2);
    assert!(report.download.failures.is_empty());
    assert_eq!(report.unmatched, vec!["airbnb".to_string()]);
    assert_eq!(workspace.subdirectories(), vec!["Tesla", "Uber"]);
    assert_eq!(workspace.combined(), "a.tesla.com\na.uber.com\n");
    assert_eq!(report.concat.appended, 2);
}

#[tokio::test]
async fn pipeline_all_selection_processes_every_entry() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([
            {"name": "alpha", "URL": format!("{uri}/alpha.zip")},
            {"name": "beta", "URL": format!("{uri}/beta.zip")},
        ]),
    )
    .await;
    mount_archive(
        &server,
        "/alpha.zip",
        &[("nested/dir/hosts.txt", "alpha.example"), ("readme.md", "ignored")],
    )
    .await;
    mount_archive(&server, "/beta.zip", &[("hosts.txt", "beta.example")]).await;

    let workspace = Workspace::new(&server);
    let report = run_pipeline(&workspace.config, &Selection::All).await.unwrap();

    assert_eq!(report.download.completed, 2);
    assert_eq!(report.download.files_extracted, 3);
    assert!(workspace.base().join("alpha/nested/dir/hosts.txt").is_file());
    assert_eq!(workspace.combined(), "alpha.example\nbeta.example\n");
}

#[tokio::test]
async fn failed_entries_do_not_stop_the_run() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([
            {"name": "missing", "URL": format!("{uri}/missing.zip")},
            {"name": "corrupt", "URL": format!("{uri}/corrupt.zip")},
            {"name": "badurl", "URL": "not a url"},
            {"name": "good", "URL": format!("{uri}/good.zip")},
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing.zip"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/corrupt.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not a zip".to_vec()))
        .mount(&server)
        .await;
    mount_archive(&server, "/good.zip", &[("good.txt", "ok")]).await;

    let workspace = Workspace::new(&server);
    let report = run_pipeline(&workspace.config, &Selection::All).await.unwrap();

    assert_eq!(report.download.selected, 4);
    assert_eq!(report.download.completed, 1);
    assert_eq!(report.download.failed(), 3);
    let failed: Vec<&str> = report
        .download
        .failures
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(failed, vec!["missing", "corrupt", "badurl"]);
    assert_eq!(workspace.combined(), "ok\n");
}

#[tokio::test]
async fn staged_archives_never_survive() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([
            {"name": "corrupt", "URL": format!("{uri}/corrupt.zip")},
            {"name": "good", "URL": format!("{uri}/good.zip")},
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/corrupt.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"garbage".to_vec()))
        .mount(&server)
        .await;
    mount_archive(&server, "/good.zip", &[("good.txt", "ok")]).await;

    let workspace = Workspace::new(&server);
    run_pipeline(&workspace.config, &Selection::All).await.unwrap();

    assert_eq!(fs::read_dir(workspace.scratch()).unwrap().count(), 0);
}

// Serves one response that declares more bytes than it sends, then closes.
async fn serve_truncated_archive() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\nPK\x03\x04short")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}/truncated.zip", addr)
}

#[tokio::test]
async fn truncated_download_removes_staged_archive() {
    let server = MockServer::start().await;
    let workspace = Workspace::new(&server);
    let client = ChaosClient::new(&workspace.config.source).unwrap();
    let entry = IndexEntry {
        name: "Truncated".to_string(),
        url: serve_truncated_archive().await,
    };

    let result = process_entry(&client, &workspace.config, &entry).await;

    assert!(matches!(result, Err(Error::Download(_))));
    assert_eq!(fs::read_dir(workspace.scratch()).unwrap().count(), 0);
    assert!(!workspace.base().join("Truncated").exists());
}

#[tokio::test]
async fn reprocessing_overwrites_previous_output() {
    let server = MockServer::start().await;
    mount_archive(&server, "/tesla.zip", &[("hosts.txt", "fresh")]).await;

    let workspace = Workspace::new(&server);
    let client = ChaosClient::new(&workspace.config.source).unwrap();
    let entry = IndexEntry {
        name: "Tesla".to_string(),
        url: format!("{}/tesla.zip", server.uri()),
    };

    fs::create_dir_all(workspace.base().join("Tesla")).unwrap();
    fs::write(workspace.base().join("Tesla/hosts.txt"), "stale and longer").unwrap();

    let first = process_entry(&client, &workspace.config, &entry).await.unwrap();
    let second = process_entry(&client, &workspace.config, &entry).await.unwrap();

    assert_eq!(first.directory, second.directory);
    assert_eq!(second.extract.files, 1);
    assert_eq!(
        fs::read_to_string(workspace.base().join("Tesla/hosts.txt")).unwrap(),
        "fresh"
    );
}

#[tokio::test]
async fn index_fetch_failure_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let workspace = Workspace::new(&server);
    let result = run_pipeline(&workspace.config, &Selection::All).await;

    assert!(matches!(result, Err(Error::Index(_))));
    assert!(!workspace.config.output.combined_file.exists());
}

#[tokio::test]
async fn undecodable_index_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let workspace = Workspace::new(&server);
    let result = run_pipeline(&workspace.config, &Selection::All).await;

    assert!(matches!(result, Err(Error::IndexDecode(_))));
}

#[tokio::test]
async fn incomplete_index_elements_are_skipped() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([
            {"name": "nourl"},
            {"URL": format!("{uri}/anon.zip")},
            {"name": "good", "URL": format!("{uri}/good.zip")},
        ]),
    )
    .await;
    mount_archive(&server, "/good.zip", &[("good.txt", "ok")]).await;

    let workspace = Workspace::new(&server);
    let report = run_pipeline(&workspace.config, &Selection::All).await.unwrap();

    assert_eq!(report.index_skipped, 2);
    assert_eq!(report.download.selected, 1);
    assert_eq!(report.download.completed, 1);
}

#[tokio::test]
async fn empty_selection_still_writes_combined_file() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([{"name": "Tesla", "URL": format!("{uri}/tesla.zip")}]),
    )
    .await;

    let workspace = Workspace::new(&server);
    let report = run_pipeline(&workspace.config, &Selection::from_list("nobody"))
        .await
        .unwrap();

    assert_eq!(report.download.selected, 0);
    assert!(workspace.subdirectories().is_empty());
    assert_eq!(workspace.combined(), "");
}

#[tokio::test]
async fn list_entries_returns_index_names() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_index(
        &server,
        json!([
            {"name": "Tesla", "URL": format!("{uri}/tesla.zip")},
            {"name": "Google", "URL": format!("{uri}/google.zip")},
        ]),
    )
    .await;

    let workspace = Workspace::new(&server);
    let names = list_entries(&workspace.config).await.unwrap();

    assert_eq!(names, vec!["Tesla", "Google"]);
}
