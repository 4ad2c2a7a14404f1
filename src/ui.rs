pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>TasteFusion</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .tabs {
      display: flex;
      gap: 10px;
      flex-wrap: wrap;
    }

    .tabs button {
      border: none;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 10px 18px;
      border-radius: 999px;
      font-size: 0.95rem;
      cursor: pointer;
    }

    .tabs button.active {
      background: var(--accent-2);
      color: #fff;
    }

    .panel {
      display: none;
    }

    .panel.active {
      display: grid;
      gap: 16px;
    }

    form {
      display: grid;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
      color: var(--accent-2);
    }

    input, select, textarea {
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      font: inherit;
      background: #fff;
    }

    .primary {
      border: none;
      background: var(--accent);
      color: #fff;
      padding: 12px 20px;
      border-radius: 14px;
      font-size: 1rem;
      cursor: pointer;
      justify-self: start;
    }

    .ghost {
      border: 1px solid rgba(47, 72, 88, 0.3);
      background: transparent;
      color: var(--accent-2);
      padding: 10px 16px;
      border-radius: 14px;
      cursor: pointer;
      justify-self: start;
    }

    ul.meals {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    ul.meals li {
      background: #fff;
      border-radius: 14px;
      padding: 12px 16px;
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    ul.meals .meta {
      color: #5f5c57;
      font-size: 0.85rem;
    }

    .delete {
      border: none;
      background: transparent;
      color: var(--accent);
      cursor: pointer;
      font-size: 1rem;
    }

    .profile-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    .stat {
      background: #fff;
      border-radius: 16px;
      padding: 16px;
    }

    .stat h3 {
      margin: 0 0 8px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--accent-2);
    }

    .recipe {
      background: #fff;
      border-radius: 16px;
      padding: 20px;
      display: grid;
      gap: 10px;
    }

    #status {
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    #status.error { color: #b3402a; }
    #status.ok { color: #2f7a4f; }
    #status.info { color: var(--accent-2); }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>TasteFusion</h1>
      <p class="subtitle">Log what you eat, learn your taste, get a fusion recipe.</p>
    </header>

    <nav class="tabs">
      <button data-tab="log" class="active">Log a meal</button>
      <button data-tab="meals">My meals</button>
      <button data-tab="profile">Taste profile</button>
      <button data-tab="recipe">Fusion recipe</button>
    </nav>

    <p id="status"></p>

    <section class="panel active" data-panel="log">
      <form id="meal-form">
        <label>Dish name
          <input name="name" required placeholder="Butter Chicken" />
        </label>
        <label>Cuisine
          <input name="cuisine" required placeholder="Indian" />
        </label>
        <label>Where
          <select name="meal_type">
            <option value="home">Home cooked</option>
            <option value="outside">Eaten outside</option>
          </select>
        </label>
        <label>Restaurant (if outside)
          <input name="restaurant_name" placeholder="Thai Express" />
        </label>
        <label>Ingredients (comma separated)
          <input name="ingredients" placeholder="chicken, butter, tomatoes" />
        </label>
        <label>Flavors (comma separated)
          <input name="flavors" placeholder="creamy, spicy" />
        </label>
        <label>Notes
          <textarea name="notes" rows="2"></textarea>
        </label>
        <button type="submit" class="primary">Add meal</button>
      </form>
      <button id="load-sample" class="ghost">Load sample data</button>
    </section>

    <section class="panel" data-panel="meals">
      <ul class="meals" id="meal-list"></ul>
    </section>

    <section class="panel" data-panel="profile">
      <div class="profile-grid" id="profile-grid"></div>
    </section>

    <section class="panel" data-panel="recipe">
      <form id="recipe-form">
        <label>Fusion style (optional)
          <input name="fusion_style" placeholder="Italian-Indian" />
        </label>
        <label>Dietary restrictions (comma separated)
          <input name="dietary_restrictions" placeholder="vegetarian" />
        </label>
        <label>Difficulty
          <select name="difficulty">
            <option value="easy">Easy</option>
            <option value="medium" selected>Medium</option>
            <option value="hard">Hard</option>
          </select>
        </label>
        <label>Max cooking time (minutes, optional)
          <input name="cooking_time" type="number" min="5" />
        </label>
        <button type="submit" class="primary">Generate recipe</button>
      </form>
      <div class="recipe" id="recipe-card" hidden></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tabs = document.querySelectorAll('.tabs button');
    const panels = document.querySelectorAll('.panel');

    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = kind || '';
    };

    const setActiveTab = (name) => {
      tabs.forEach((b) => b.classList.toggle('active', b.dataset.tab === name));
      panels.forEach((p) => p.classList.toggle('active', p.dataset.panel === name));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    const splitTokens = (value) =>
      value.split(',').map((t) => t.trim()).filter((t) => t.length > 0);

    const escapeHtml = (value) =>
      value.replace(/[&<>"']/g, (c) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[c]);

    const renderMeals = (meals) => {
      const list = document.getElementById('meal-list');
      if (meals.length === 0) {
        list.innerHTML = '<li><span>No meals logged yet.</span></li>';
        return;
      }
      list.innerHTML = meals.map((meal, index) => `
        <li>
          <div>
            <strong>${escapeHtml(meal.name)}</strong>
            <div class="meta">${escapeHtml(meal.cuisine)} &middot; ${meal.meal_type}${meal.restaurant_name ? ' &middot; ' + escapeHtml(meal.restaurant_name) : ''}</div>
          </div>
          <button class="delete" data-index="${index}">Remove</button>
        </li>`).join('');
      list.querySelectorAll('.delete').forEach((button) => {
        button.addEventListener('click', () => removeMeal(Number(button.dataset.index)));
      });
    };

    const renderProfile = (profile) => {
      const grid = document.getElementById('profile-grid');
      const pct = Math.round(profile.home_vs_outside_ratio * 100);
      const listOrDash = (items) =>
        items.length ? items.map(escapeHtml).join(', ') : '&mdash;';
      grid.innerHTML = `
        <div class="stat"><h3>Meals logged</h3>${profile.meal_count}</div>
        <div class="stat"><h3>Home cooking</h3>${pct}%</div>
        <div class="stat"><h3>Favorite cuisines</h3>${listOrDash(profile.favorite_cuisines)}</div>
        <div class="stat"><h3>Preferred flavors</h3>${listOrDash(profile.preferred_flavors)}</div>
        <div class="stat"><h3>Common ingredients</h3>${listOrDash(profile.common_ingredients)}</div>`;
    };

    const loadMeals = async () => {
      const res = await fetch('/meals');
      if (!res.ok) throw new Error('Unable to load meals');
      renderMeals((await res.json()).meals);
    };

    const loadProfile = async () => {
      const res = await fetch('/profile');
      if (!res.ok) throw new Error('Unable to load profile');
      renderProfile(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadMeals(), loadProfile()]);
    };

    const removeMeal = async (index) => {
      const res = await fetch(`/meals/${index}`, { method: 'DELETE' });
      if (!res.ok) {
        setStatus(await res.text() || 'Delete failed', 'error');
        return;
      }
      setStatus('Removed', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('meal-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const body = {
        name: form.get('name'),
        cuisine: form.get('cuisine'),
        meal_type: form.get('meal_type'),
        ingredients: splitTokens(form.get('ingredients') || ''),
        flavors: splitTokens(form.get('flavors') || ''),
      };
      if (form.get('restaurant_name')) body.restaurant_name = form.get('restaurant_name');
      if (form.get('notes')) body.notes = form.get('notes');

      setStatus('Saving...', 'info');
      const res = await fetch('/meals', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        setStatus(await res.text() || 'Request failed', 'error');
        return;
      }
      event.target.reset();
      setStatus('Saved', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('load-sample').addEventListener('click', async () => {
      setStatus('Loading sample meals...', 'info');
      const res = await fetch('/load-sample-data', { method: 'POST' });
      if (!res.ok) {
        setStatus('Unable to load sample data', 'error');
        return;
      }
      setStatus('Sample meals loaded', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('recipe-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const body = {
        dietary_restrictions: splitTokens(form.get('dietary_restrictions') || ''),
        difficulty: form.get('difficulty'),
      };
      if (form.get('fusion_style')) body.fusion_style = form.get('fusion_style');
      if (form.get('cooking_time')) body.cooking_time = Number(form.get('cooking_time'));

      setStatus('Asking the chef...', 'info');
      const res = await fetch('/generate-recipe', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        setStatus(await res.text() || 'Recipe generation failed', 'error');
        return;
      }
      const { recipe } = await res.json();
      const card = document.getElementById('recipe-card');
      card.hidden = false;
      card.innerHTML = `
        <h2>${escapeHtml(recipe.name)}</h2>
        <p>${escapeHtml(recipe.description)}</p>
        <p class="meta">Fusion of ${recipe.fusion_of.map(escapeHtml).join(' + ')}
          &middot; prep ${recipe.prep_time} min &middot; cook ${recipe.cook_time} min
          &middot; ${recipe.difficulty}</p>
        <h3>Ingredients</h3>
        <ul>${recipe.ingredients.map((i) => `<li>${escapeHtml(i)}</li>`).join('')}</ul>
        <h3>Instructions</h3>
        <ol>${recipe.instructions.map((i) => `<li>${escapeHtml(i)}</li>`).join('')}</ol>
        <p><em>${escapeHtml(recipe.why_youll_love_it)}</em></p>`;
      setStatus('', '');
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
