//! Global CSS styles for the portfolio site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #ffffff;
  --bg-subtle: #f9fafb;
  --bg-muted: #f3f4f6;
  --bg-hover: #e5e7eb;
  --border: #e5e7eb;
  --border-strong: #d1d5db;

  /* Text */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* Accent */
  --accent: #2563eb;
  --accent-soft: #dbeafe;
  --accent-strong: #1e3a8a;

  --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);

  /* Typography */
  --font-sans: 'Space Grotesk', 'Noto Sans', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;

  color-scheme: light;
}

:root.dark {
  --bg: #111827;
  --bg-subtle: #1f2937;
  --bg-muted: #1f2937;
  --bg-hover: #374151;
  --border: #374151;
  --border-strong: #4b5563;

  --text-primary: #f3f4f6;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  --accent: #60a5fa;
  --accent-soft: #1e3a8a;
  --accent-strong: #dbeafe;

  --shadow: 0 10px 15px -3px rgba(17, 24, 39, 0.5);

  color-scheme: dark;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Icons === */
.icon { width: 1.5rem; height: 1.5rem; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-lg { width: 1.5rem; height: 1.5rem; }

/* === Loading === */
.loading-screen {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100vh;
  background: var(--bg);
  transition: background-color var(--transition-normal);
}

.loading-text {
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

/* === Layout === */
.page {
  position: relative;
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  background: var(--bg);
  overflow-x: hidden;
  transition: background-color var(--transition-normal);
}

.page-main {
  display: flex;
  justify-content: center;
  padding: 1.25rem 1rem;
}

.page-column {
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 56rem;
}

@media (min-width: 768px) {
  .page-main { padding: 1.25rem 2.5rem; }
}

@media (min-width: 1024px) {
  .page-main { padding: 1.25rem 10rem; }
}

/* === Header === */
.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  white-space: nowrap;
  padding: 0.75rem 2.5rem;
  border-bottom: 1px solid var(--border);
  background: var(--bg);
  transition: background-color var(--transition-normal), border-color var(--transition-normal);
}

.site-title {
  font-size: var(--text-lg);
  letter-spacing: -0.015em;
}

.site-nav {
  display: none;
  gap: 1.5rem;
}

@media (min-width: 768px) {
  .site-nav { display: flex; }
}

.site-nav-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.site-nav-link:hover {
  color: var(--accent);
}

/* === Theme Selector === */
.theme-selector {
  position: relative;
}

.theme-selector-button {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  font: inherit;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  background: var(--bg);
  border: 1px solid var(--border-strong);
  border-radius: 0.375rem;
  cursor: pointer;
  transition: background-color var(--transition-fast);
}

.theme-selector-button:hover {
  background: var(--bg-subtle);
}

.theme-resolved {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.chevron {
  transition: transform var(--transition-fast);
}

.chevron.open {
  transform: rotate(180deg);
}

.theme-overlay {
  position: fixed;
  inset: 0;
  z-index: 10;
}

.theme-menu {
  position: absolute;
  right: 0;
  margin-top: 0.5rem;
  width: 12rem;
  padding: 0.25rem 0;
  background: var(--bg);
  border: 1px solid var(--border-strong);
  border-radius: 0.375rem;
  box-shadow: var(--shadow);
  z-index: 20;
}

.theme-option {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.5rem 1rem;
  font: inherit;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  background: transparent;
  border: none;
  cursor: pointer;
  transition: background-color var(--transition-fast);
}

.theme-option:hover {
  background: var(--bg-muted);
}

.theme-option.selected {
  background: var(--accent-soft);
  color: var(--accent-strong);
}

.theme-option-label {
  flex: 1;
  text-align: left;
}

.theme-check {
  color: var(--accent);
}

/* === Dark Mode Toggle === */
.dark-mode-toggle {
  position: fixed;
  bottom: 2rem;
  right: 2rem;
  width: 3rem;
  height: 3rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-primary);
  background: var(--bg);
  border: 2px solid var(--border);
  border-radius: 9999px;
  box-shadow: var(--shadow);
  cursor: pointer;
  z-index: 50;
  transition: all var(--transition-normal);
}

.dark-mode-toggle:hover {
  transform: scale(1.1);
}

/* === Sections === */
.section {
  transition: color var(--transition-normal);
}

.section-header {
  font-size: var(--text-2xl);
  font-weight: 700;
  line-height: 1.25;
  letter-spacing: -0.015em;
  padding: 1.25rem 1rem 0.75rem;
}

.section-header-lg {
  font-size: var(--text-3xl);
}

.section-subtitle {
  color: var(--text-muted);
  font-size: var(--text-sm);
  padding: 0 1rem 0.75rem;
}

.subsection-header {
  font-size: var(--text-lg);
  font-weight: 700;
  line-height: 1.25;
  padding: 1rem 1rem 0.5rem;
}

.body-text {
  color: var(--text-secondary);
  font-size: var(--text-base);
  line-height: 1.625;
  padding: 0.25rem 1rem 0.75rem;
}

/* === Hero === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  text-align: center;
}

.hero-avatar {
  width: 8rem;
  height: 8rem;
  border-radius: 9999px;
  object-fit: cover;
  box-shadow: 0 0 0 4px var(--border);
  transition: box-shadow var(--transition-normal);
}

.hero-name {
  font-size: var(--text-2xl);
  font-weight: 700;
  letter-spacing: -0.015em;
}

.hero-title {
  color: var(--accent);
}

.hero-description {
  color: var(--text-secondary);
  max-width: 42rem;
}

/* === Skills === */
.skill-category-title {
  display: flex;
  align-items: center;
}

.skill-category-icon {
  width: 1.25rem;
  height: 1.25rem;
  margin-left: 1rem;
}

.skill-badges {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  padding: 0.75rem 1rem 0.75rem 0.75rem;
}

.skill-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  height: 2rem;
  padding: 0 1rem 0 0.5rem;
  border-radius: 9999px;
  background: var(--bg-muted);
  transition: all var(--transition-fast);
}

.skill-badge:hover {
  background: var(--bg-hover);
  transform: translateY(-2px);
  box-shadow: var(--shadow);
}

.skill-badge-mark {
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 0.25rem;
  background: var(--text-primary);
}

.skill-badge-name {
  font-size: var(--text-sm);
  font-weight: 500;
}

.skill-badge-level {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Experience === */
.timeline {
  padding: 0 1rem;
}

.timeline-entry {
  display: grid;
  grid-template-columns: 40px 1fr;
  column-gap: 0.5rem;
}

.timeline-marker {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  padding-top: 0.25rem;
}

.timeline-dot {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  background-color: var(--bg-muted);
  background-size: cover;
  background-position: center;
  box-shadow: 0 0 0 2px var(--border-strong);
}

.timeline-connector {
  width: 1.5px;
  flex-grow: 1;
  min-height: 0.5rem;
  background: var(--border-strong);
}

.timeline-body {
  padding: 0.75rem 0;
}

.timeline-title {
  font-weight: 500;
}

.timeline-position,
.timeline-meta {
  color: var(--text-secondary);
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(158px, 1fr));
  gap: 0.75rem;
  padding: 1rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding-bottom: 0.75rem;
}

.project-image {
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
  border-radius: 0.5rem;
}

.project-placeholder {
  font-size: 2.25rem;
  color: var(--text-muted);
}

.project-title {
  font-size: var(--text-base);
  font-weight: 500;
}

.project-description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.project-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
  list-style: none;
}

.project-tech-item {
  padding: 0.125rem 0.5rem;
  font-size: var(--text-xs);
  border-radius: 9999px;
  background: var(--bg-muted);
  color: var(--text-secondary);
}

.project-links {
  display: flex;
  gap: 1rem;
}

.project-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--accent);
  font-size: var(--text-sm);
}

.project-link:hover {
  text-decoration: underline;
}

/* === Contact === */
.contact {
  min-height: 100vh;
  padding-top: 1.25rem;
}

.contact-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 0 1rem;
}

.contact-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  min-height: 3.5rem;
  padding: 0 1rem;
  border-radius: 0.5rem;
  background: var(--bg-subtle);
  transition: background-color var(--transition-fast);
}

.contact-item:hover {
  background: var(--bg-muted);
}

.contact-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.5rem;
  color: var(--text-secondary);
  background: var(--bg-hover);
}

.contact-value {
  flex: 1;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}
"#;
