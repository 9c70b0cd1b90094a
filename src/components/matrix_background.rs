use dioxus::prelude::*;

// Matrix rain drawn on a fixed canvas. The animation itself runs inside the
// webview; the script is installed once on mount and keeps its own interval,
// so no per-frame traffic crosses the Rust/JS boundary.
const MATRIX_SCRIPT: &str = r#"
    if (!window.__matrixRain) {
        window.__matrixRain = true;
        const canvas = document.getElementById('matrix-canvas');
        if (canvas) {
            const ctx = canvas.getContext('2d');
            const resize = () => {
                canvas.width = window.innerWidth;
                canvas.height = window.innerHeight;
            };
            resize();
            window.addEventListener('resize', resize);

            const chars = '01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン'.split('');
            const fontSize = 14;
            const drops = [];
            for (let i = 0; i < canvas.width / fontSize; i++) {
                drops[i] = Math.random() * canvas.height;
            }

            setInterval(() => {
                ctx.fillStyle = 'rgba(15, 23, 42, 0.05)';
                ctx.fillRect(0, 0, canvas.width, canvas.height);
                ctx.font = fontSize + "px 'JetBrains Mono', monospace";
                for (let i = 0; i < drops.length; i++) {
                    const char = chars[Math.floor(Math.random() * chars.length)];
                    ctx.fillStyle = 'rgba(16, 185, 129, ' + (Math.random() * 0.5 + 0.1) + ')';
                    ctx.fillText(char, i * fontSize, drops[i] * fontSize);
                    if (drops[i] * fontSize > canvas.height && Math.random() > 0.975) {
                        drops[i] = 0;
                    }
                    drops[i] += Math.random() * 0.5 + 0.5;
                }
            }, 50);
        }
    }
"#;

#[component]
pub fn MatrixBackground() -> Element {
    use_effect(move || {
        spawn(async move {
            if let Err(e) = document::eval(MATRIX_SCRIPT).await {
                tracing::warn!("failed to start matrix background: {e:?}");
            }
        });
    });

    rsx! {
        canvas {
            id: "matrix-canvas",
            class: "fixed inset-0 pointer-events-none opacity-20 z-0",
        }
    }
}
