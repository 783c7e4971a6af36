//! Global CSS styles for the participants list kit.
//!
//! Injected once by the host view (the demo does this in its root
//! component). Class names here are the contract between the components
//! and the stylesheet; everything else is free to be restyled.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #141417;
  --surface-raised: #1e1e22;
  --surface-hover: #2a2a30;
  --border: #2e2e34;

  /* Text */
  --text-primary: #f5f5f7;
  --text-secondary: rgba(245, 245, 247, 0.65);

  /* Semantic label colors */
  --label-success-text: #2fa85b;
  --label-warning-text: #d9820a;
  --label-error-text: #e25252;
  --label-secondary-text: #9b9ba3;

  /* Type scale */
  --text-sm: 0.8125rem;
  --text-base: 0.9375rem;
  --text-lg: 1.125rem;

  /* Transitions */
  --transition-fast: 120ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  font-size: var(--text-base);
  line-height: 1.4;
}

/* === Roster Window === */
.roster-window {
  display: flex;
  flex-direction: column;
  height: 100vh;
  padding: 16px;
  gap: 12px;
}

.roster-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  padding: 0 8px;
}

.roster-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.roster-count-badge {
  margin-left: 8px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 400;
}

.roster-started {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.roster-list {
  display: flex;
  flex-direction: column;
  gap: 4px;
  overflow-y: auto;
}

.roster-empty {
  padding: 24px 8px;
  color: var(--text-secondary);
  text-align: center;
}

.roster-footer {
  display: flex;
  justify-content: center;
  padding-top: 8px;
  margin-top: auto;
}

/* === List Item Base === */
.list-item-base {
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: 12px;
  padding: 0 12px;
  background: var(--surface-raised);
  transition: background var(--transition-fast);
}

.list-item-base:hover {
  background: var(--surface-hover);
}

.list-item-base.is-pilled {
  border-radius: 25px;
}

.list-item-section {
  display: flex;
  align-items: center;
  gap: 8px;
}

.list-item-section.section-start {
  flex-shrink: 0;
}

.list-item-section.section-middle {
  flex: 1;
  min-width: 0;
  overflow: hidden;
}

.list-item-section.section-end {
  flex-shrink: 0;
  margin-left: auto;
}

.avatar-list-item-lines {
  display: flex;
  flex-direction: column;
  min-width: 0;
}

/* === Avatar === */
.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--surface-hover);
  overflow: hidden;
  flex-shrink: 0;
}

.avatar-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-initials {
  color: var(--text-primary);
  font-size: var(--text-sm);
  font-weight: 600;
  text-transform: uppercase;
}

/* === Text === */
.text-body-primary {
  color: var(--text-primary);
  font-size: var(--text-base);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.text-body-secondary {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Buttons === */
.btn-circle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: 50%;
  background: var(--surface-hover);
  color: var(--text-primary);
  cursor: pointer;
  flex-shrink: 0;
  transition: background var(--transition-fast);
}

.btn-circle:hover {
  background: var(--border);
}

.btn-circle:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-circle.ghost {
  background: transparent;
}

.btn-circle.ghost:hover {
  background: var(--surface-hover);
}

.btn-pill {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 6px;
  border: none;
  border-radius: 999px;
  padding: 0 16px;
  background: var(--surface-hover);
  color: var(--text-primary);
  font-size: var(--text-base);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-pill:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-pill.ghost {
  background: transparent;
}

.btn-pill.outline {
  background: transparent;
  border: 1px solid var(--border);
}

.btn-join {
  background: var(--label-success-text);
  color: #ffffff;
}

.btn-cancel {
  background: var(--label-error-text);
  color: #ffffff;
}

.btn-message {
  background: var(--surface-hover);
  color: var(--text-primary);
}

/* === Icons === */
.icon {
  display: inline-block;
  flex-shrink: 0;
  vertical-align: middle;
}
"#;
