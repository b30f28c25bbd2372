//! # Upload Form Page
//!
//! 埋め込みのアップロードフォームHTML

/// トップページのHTML
pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Tatami - Image Grid Montage</title>
    <style>
      body { font-family: ui-sans-serif, system-ui, sans-serif;
             max-width: 640px; margin: 40px auto; padding: 0 16px; color: #222; }
      h1 { font-size: 1.4rem; }
      form { display: grid; gap: 12px; }
      label { display: flex; flex-direction: column; gap: 4px; font-size: 0.9rem; }
      input[type="number"] { width: 8rem; padding: 4px 6px; }
      button { width: fit-content; padding: 8px 20px; cursor: pointer; }
      p.hint { color: #666; font-size: 0.85rem; }
    </style>
  </head>
  <body>
    <h1>Image Grid Montage</h1>
    <p class="hint">
      Upload images and tile them into grids.
      Every rows x cols images become one composite PNG.
    </p>
    <form action="/upload" method="post" enctype="multipart/form-data">
      <label>Rows
        <input type="number" name="rows" value="2" min="1" required />
      </label>
      <label>Columns
        <input type="number" name="cols" value="2" min="1" required />
      </label>
      <label>Scale
        <input type="number" name="scale" value="1.0" min="0.01" step="0.01" required />
      </label>
      <label>Images
        <input type="file" name="files[]" accept="image/*" multiple required />
      </label>
      <button type="submit">Compose</button>
    </form>
    <p class="hint"><a href="/results">Browse generated composites</a></p>
  </body>
</html>
"##;
