//! Window stylesheet

/// Injected once at the root of the layout
pub const STYLES: &str = r#"
:root {
    --bg-base: #14181B;
    --bg-elevated: #1D2328;
    --text-primary: #F2EDE7;
    --text-secondary: rgba(242, 237, 231, 0.72);
    --text-tertiary: rgba(242, 237, 231, 0.45);
    --accent-primary: #2A6B7C;
    --warning: #C4993B;
    --error: #B5484A;
    --border-subtle: rgba(242, 237, 231, 0.08);
}

body {
    margin: 0;
    background: var(--bg-base);
    color: var(--text-primary);
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

.app {
    max-width: 640px;
    margin: 0 auto;
    padding: 32px 24px;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.title { font-size: 24px; font-weight: 600; margin: 0; }
.section-title { font-size: 15px; font-weight: 600; margin: 0 0 8px 0; }

.glass {
    background: rgba(242, 237, 231, 0.03);
    border: 1px solid var(--border-subtle);
    border-radius: 16px;
    padding: 20px;
}

.glass-strong {
    background: var(--bg-elevated);
    border: 1px solid var(--border-subtle);
    border-radius: 16px;
}

.quote-display { min-height: 96px; }
.quote { font-size: 18px; font-style: italic; margin: 0 0 12px 0; }
.category { font-size: 13px; color: var(--text-tertiary); margin: 0; }
.placeholder { color: var(--text-tertiary); margin: 0; }

.filter-row { display: flex; align-items: center; gap: 12px; color: var(--text-secondary); font-size: 13px; }

.add-quote { display: flex; flex-direction: column; gap: 8px; }

input, select {
    background: var(--bg-elevated);
    color: var(--text-primary);
    border: 1px solid var(--border-subtle);
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 14px;
    outline: none;
}

.toolbar { display: flex; flex-wrap: wrap; align-items: center; gap: 8px; }
.count { color: var(--text-tertiary); font-size: 12px; margin-right: auto; }

.btn {
    background: var(--bg-elevated);
    color: var(--text-primary);
    border: 1px solid var(--border-subtle);
    border-radius: 10px;
    padding: 8px 14px;
    font-size: 13px;
    cursor: pointer;
}
.btn:hover { filter: brightness(1.15); }
.btn-primary { background: var(--accent-primary); border-color: transparent; }
.btn-danger { background: var(--error); border-color: transparent; }

.notification {
    background: rgba(42, 107, 124, 0.18);
    border: 1px solid rgba(42, 107, 124, 0.4);
    border-radius: 10px;
    padding: 10px 14px;
    font-size: 13px;
}

.backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
}

.dialog { width: 100%; max-width: 420px; padding: 24px; }
.dialog-header { display: flex; align-items: center; gap: 12px; margin-bottom: 8px; }
.dialog-title { font-size: 17px; font-weight: 600; margin: 0; }
.dialog-message { color: var(--text-secondary); font-size: 14px; }
.dialog-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px; }

.warning-icon {
    width: 40px;
    height: 40px;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--warning);
    background: rgba(196, 153, 59, 0.12);
    border: 1px solid rgba(196, 153, 59, 0.2);
}

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes scale-in { from { opacity: 0; transform: scale(0.96); } to { opacity: 1; transform: scale(1); } }
.animate-fade-in { animation: fade-in 0.2s ease-out; }
.animate-scale-in { animation: scale-in 0.18s ease-out; }
"#;
