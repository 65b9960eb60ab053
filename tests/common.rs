#![allow(dead_code)]

use anyhow::Result;
use axum::response::Response;
use axum::Router;
use bytes::Bytes;
use cms::{config, db, router, s3, storage, AppState};
use http_body_util::BodyExt as _;
use testcontainers_modules::{
    minio, postgres,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};

pub const BUCKET: &str = "cms-uploads";
pub const BOUNDARY: &str = "cms-test-boundary";

pub async fn initialize_s3() -> Result<(ContainerAsync<minio::MinIO>, aws_sdk_s3::Client, String)> {
    let container = minio::MinIO::default().start().await?;

    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(9000).await?;

    let endpoint = format!("http://{host}:{port}");
    let client = s3::create_client(&endpoint, "minioadmin", "minioadmin", "us-east-1").await;

    Ok((container, client, endpoint))
}

pub async fn initialize_pg() -> Result<(ContainerAsync<postgres::Postgres>, deadpool_postgres::Pool)>
{
    let container = postgres::Postgres::default().start().await?;

    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(5432).await?;

    let conn_str = format!("postgres://postgres:postgres@{host}:{port}/postgres");
    let pool = db::create_pool(&conn_str);
    db::init_db(&pool).await?;

    Ok((container, pool))
}

pub async fn setup_app() -> Result<(
    ContainerAsync<postgres::Postgres>,
    ContainerAsync<minio::MinIO>,
    Router,
    aws_sdk_s3::Client,
)> {
    let (pg_container, pool) = initialize_pg().await?;
    let (s3_container, s3_client, endpoint) = initialize_s3().await?;

    s3_client.create_bucket().bucket(BUCKET).send().await?;

    let config = config::Config {
        log_level: "info".into(),
        address: "127.0.0.1:0".into(),
        database_url: "postgres://localhost:5432/postgres".into(),
        s3_url: endpoint.clone(),
        s3_region: "us-east-1".into(),
        s3_access_key: "minioadmin".into(),
        s3_secret_key: "minioadmin".into(),
        s3_bucket: BUCKET.into(),
        public_url_base: None,
    };

    let state = AppState {
        config,
        docs: db::DocStore::new(pool),
        uploads: storage::ObjectStore::new(s3_client.clone(), BUCKET, endpoint),
    };

    let router = router::create_router(state);

    Ok((pg_container, s3_container, router, s3_client))
}

pub async fn read_body(response: Response) -> Result<Bytes> {
    let collected = response.into_body().collect().await?;
    Ok(collected.to_bytes())
}

pub async fn read_json(response: Response) -> Result<serde_json::Value> {
    let bytes = read_body(response).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn list_bucket_keys(client: &aws_sdk_s3::Client) -> Result<Vec<String>> {
    let objects = client.list_objects_v2().bucket(BUCKET).send().await?;

    Ok(objects
        .contents()
        .iter()
        .filter_map(|obj| obj.key().map(str::to_string))
        .collect())
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        field: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                field,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        field, filename, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
