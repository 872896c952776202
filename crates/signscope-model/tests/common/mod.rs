//! Shared fixtures: synthesized artifacts and an in-process artifact server.

use axum::http::header;
use axum::routing::get;
use axum::Router;
use candle_core::{DType, Device, Tensor};
use signscope_core::NUM_CLASSES;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Write a structurally valid artifact with random weights of the shapes the
/// predictor expects.
pub fn write_artifact(path: &Path) {
    let dev = Device::Cpu;
    let randn = |shape: (usize, usize, usize, usize)| {
        Tensor::randn(0f32, 0.05f32, shape, &dev).unwrap()
    };
    let zeros = |len: usize| Tensor::zeros(len, DType::F32, &dev).unwrap();

    let mut tensors = HashMap::new();
    tensors.insert("conv1.weight".to_string(), randn((32, 3, 5, 5)));
    tensors.insert("conv1.bias".to_string(), zeros(32));
    tensors.insert("conv2.weight".to_string(), randn((64, 32, 3, 3)));
    tensors.insert("conv2.bias".to_string(), zeros(64));
    tensors.insert(
        "fc1.weight".to_string(),
        Tensor::randn(0f32, 0.05f32, (256, 64 * 6 * 6), &dev).unwrap(),
    );
    tensors.insert("fc1.bias".to_string(), zeros(256));
    tensors.insert(
        "fc2.weight".to_string(),
        Tensor::randn(0f32, 0.05f32, (NUM_CLASSES, 256), &dev).unwrap(),
    );
    tensors.insert("fc2.bias".to_string(), zeros(NUM_CLASSES));

    candle_core::safetensors::save(&tensors, path).unwrap();
}

/// Read a synthesized artifact back as raw bytes.
pub fn artifact_bytes() -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.safetensors");
    write_artifact(&path);
    std::fs::read(&path).unwrap()
}

/// Serve a fixed body with a fixed content type, counting requests.
///
/// Returns the URL of the served artifact and the request counter.
pub async fn serve_artifact(
    body: Vec<u8>,
    content_type: &'static str,
) -> (String, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let hits = counter.clone();

    let app = Router::new().route(
        "/model.safetensors",
        get(move || {
            let body = body.clone();
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                ([(header::CONTENT_TYPE, content_type)], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/model.safetensors"), counter)
}
