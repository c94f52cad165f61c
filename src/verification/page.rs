//! Server-rendered PIN entry form.

const TOKEN_PLACEHOLDER: &str = "{{TOKEN}}";

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Проверка документа</title>
<style>
  body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f5f5f5; font-family: sans-serif; }
  main { width: 100%; max-width: 28rem; background: #fff; border: 1px solid #e4e4e7; border-radius: 6px; padding: 1.5rem; }
  h1 { font-size: 1.25rem; text-align: center; margin: 0 0 .25rem; }
  p.hint { font-size: .875rem; color: #52525b; text-align: center; margin: 0 0 1.5rem; }
  input { box-sizing: border-box; width: 100%; border: 1px solid #d4d4d8; border-radius: 4px; padding: .5rem .75rem; }
  button { width: 100%; margin-top: 1rem; background: #2563eb; color: #fff; border: 0; border-radius: 4px; padding: .5rem; font-weight: 500; }
  button:disabled { opacity: .6; }
  #error { color: #dc2626; font-size: .875rem; min-height: 1.25rem; }
</style>
</head>
<body>
<main>
  <h1>Введите код доступа</h1>
  <p class="hint">Введите PIN-код, указанный в PDF-файле.</p>
  <form id="pin-form">
    <input id="pin" type="text" inputmode="numeric" pattern="\d{6}" placeholder="Например: 123456" required>
    <p id="error"></p>
    <button id="submit" type="submit">Подтвердить</button>
  </form>
</main>
<script>
  const token = "{{TOKEN}}";
  const form = document.getElementById("pin-form");
  const button = document.getElementById("submit");
  const error = document.getElementById("error");
  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    button.disabled = true;
    button.textContent = "Проверка…";
    error.textContent = "";
    try {
      const res = await fetch("/verify", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ token, pin: document.getElementById("pin").value }),
      });
      const data = await res.json();
      if (!data.ok) {
        error.textContent = "Неверный PIN-код. Попробуйте снова.";
      } else {
        window.location.href = data.fileUrl;
        return;
      }
    } catch (e) {
      error.textContent = "Ошибка. Попробуйте позже.";
    }
    button.disabled = false;
    button.textContent = "Подтвердить";
  });
</script>
</body>
</html>
"#;

/// HTML form for `token`. The caller guarantees the token is a well-formed UUID.
pub fn render(token: &str) -> String {
    PAGE.replace(TOKEN_PLACEHOLDER, token)
}
