use axum::response::Html;

/// Serve the embedded single-page upload UI
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Signscope</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-900 text-white min-h-screen">
    <div class="container mx-auto px-4 py-8 max-w-3xl">
        <header class="mb-8">
            <h1 class="text-4xl font-bold text-blue-400">&#128663; Signscope</h1>
            <p class="text-gray-400 mt-2">Upload a photo of a traffic sign to classify it</p>
        </header>

        <div class="bg-gray-800 rounded-lg p-6 mb-6">
            <label class="block text-sm text-gray-400 mb-2" for="file">
                Traffic sign image (JPEG or PNG)
            </label>
            <input type="file" id="file" accept="image/jpeg,image/png"
                   class="block w-full text-sm text-gray-300 file:mr-4 file:py-2 file:px-4
                          file:rounded file:border-0 file:bg-blue-600 file:text-white
                          hover:file:bg-blue-700">
            <div id="preview-wrap" class="mt-4 hidden">
                <img id="preview" alt="Uploaded image"
                     class="max-h-64 rounded border border-gray-700 mx-auto">
            </div>
        </div>

        <div id="result" class="hidden bg-gray-800 rounded-lg p-6 mb-6">
            <h2 class="text-xl font-semibold mb-4">&#129504; Prediction Result</h2>
            <div class="bg-green-900/40 border border-green-600 rounded p-4 mb-3">
                <span class="text-gray-400">Traffic Sign:</span>
                <span id="label" class="font-bold text-green-300 ml-2"></span>
            </div>
            <div class="bg-blue-900/40 border border-blue-600 rounded p-4">
                <span class="text-gray-400">Confidence:</span>
                <span id="confidence" class="font-mono text-blue-300 ml-2"></span>
            </div>
        </div>

        <div id="error" class="hidden bg-red-900/40 border border-red-600 rounded-lg p-4 mb-6">
            <span id="error-text" class="text-red-300"></span>
        </div>

        <div id="spinner" class="hidden text-gray-400 mb-6">Classifying&hellip;</div>

        <footer class="text-sm text-gray-500">
            <span id="model-status">Checking model&hellip;</span>
        </footer>
    </div>

    <script>
        const fileInput = document.getElementById('file');
        const preview = document.getElementById('preview');
        const previewWrap = document.getElementById('preview-wrap');
        const result = document.getElementById('result');
        const errorBox = document.getElementById('error');
        const spinner = document.getElementById('spinner');

        fetch('/api/model')
            .then(r => r.json())
            .then(status => {
                const el = document.getElementById('model-status');
                el.textContent = status.loaded
                    ? 'Model loaded'
                    : (status.valid ? 'Model cached, loads on first upload'
                                    : 'Model downloads on first upload');
            })
            .catch(() => {});

        fileInput.addEventListener('change', async () => {
            const file = fileInput.files[0];
            result.classList.add('hidden');
            errorBox.classList.add('hidden');
            if (!file) {
                previewWrap.classList.add('hidden');
                return;
            }

            preview.src = URL.createObjectURL(file);
            previewWrap.classList.remove('hidden');
            spinner.classList.remove('hidden');

            const form = new FormData();
            form.append('image', file);

            try {
                const response = await fetch('/api/predict', { method: 'POST', body: form });
                const body = await response.json();
                if (!response.ok) {
                    showError(body.error || ('prediction failed with status ' + response.status));
                    return;
                }
                document.getElementById('label').textContent = body.label;
                document.getElementById('confidence').textContent =
                    (body.score * 100).toFixed(2) + '%';
                result.classList.remove('hidden');
            } catch (err) {
                showError('request failed: ' + err.message);
            } finally {
                spinner.classList.add('hidden');
            }
        });

        function showError(message) {
            document.getElementById('error-text').textContent = message;
            errorBox.classList.remove('hidden');
        }
    </script>
</body>
</html>
"#;
