use crate::models::DRINK_TYPES;

pub fn render_index(today: &str) -> String {
    let options: String = DRINK_TYPES
        .iter()
        .map(|drink_type| format!("<option value=\"{drink_type}\">{drink_type}</option>"))
        .collect();

    INDEX_HTML
        .replace("{{DATE}}", today)
        .replace("{{OPTIONS}}", &options)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>晩酌カウンター</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4);
      color: var(--ink);
      font-family: "Hiragino Sans", "Noto Sans JP", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: flex-start;
    }

    select[multiple] {
      min-width: 160px;
      min-height: 150px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      padding: 6px;
    }

    input[type="date"] {
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      padding: 10px;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent-2);
    }

    button:active {
      transform: scale(0.98);
    }

    #countButton {
      background: var(--accent);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      border-bottom: 1px solid rgba(47, 72, 88, 0.15);
      padding: 8px 10px;
      text-align: left;
    }

    .chart-card {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: #6b645d;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>晩酌カウンター</h1>

    <section class="controls">
      <input type="date" id="datePicker" value="{{DATE}}" />
      <select id="drinkType" multiple>{{OPTIONS}}</select>
      <button id="countButton" type="button">カウント</button>
      <button id="graphButton" type="button">グラフ作成</button>
      <button id="resetButton" type="button">リセット</button>
    </section>

    <table id="drinkTable">
      <thead>
        <tr><th>日付</th><th>種類</th><th>杯数</th></tr>
      </thead>
      <tbody></tbody>
    </table>

    <div class="chart-card">
      <canvas id="chart" height="240"></canvas>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
  <script>
    const datePicker = document.getElementById('datePicker');
    const drinkType = document.getElementById('drinkType');
    const countButton = document.getElementById('countButton');
    const graphButton = document.getElementById('graphButton');
    const resetButton = document.getElementById('resetButton');
    const tableBody = document.querySelector('#drinkTable tbody');
    const chartCanvas = document.getElementById('chart');
    const statusEl = document.getElementById('status');

    let chartInstance = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateTable = (records) => {
      tableBody.innerHTML = '';
      records.forEach((record) => {
        const row = document.createElement('tr');
        [record.date, record.type, record.count].forEach((value) => {
          const cell = document.createElement('td');
          cell.textContent = value;
          row.appendChild(cell);
        });
        tableBody.appendChild(row);
      });
    };

    countButton.addEventListener('click', async () => {
      const types = Array.from(drinkType.selectedOptions, (option) => option.value);
      const res = await fetch('/api/increment', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: datePicker.value, types })
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      updateTable(await res.json());
      setStatus('', '');
    });

    graphButton.addEventListener('click', async () => {
      const res = await fetch('/api/chart', { method: 'POST' });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      const config = await res.json();
      if (chartInstance) {
        chartInstance.destroy();
      }
      chartInstance = new Chart(chartCanvas, config);
    });

    resetButton.addEventListener('click', async () => {
      tableBody.innerHTML = '';
      if (chartInstance) {
        chartInstance.destroy();
        chartInstance = null;
      }
      await fetch('/api/reset', { method: 'POST' });
    });

    fetch('/api/records')
      .then((res) => res.json())
      .then(updateTable)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
