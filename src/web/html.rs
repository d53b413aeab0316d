//! Browser console page.

/// Single-file console page.
///
/// On load it fetches `/profile`, opens a WebSocket to the profile endpoint,
/// and wires one button per template. Inbound messages are pretty-printed
/// with long strings truncated and prepended to the log. Closing raises a
/// blocking `alert()` with the code and its reason.
pub const CONSOLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>wsdebug</title>
    <style>
        * {
            box-sizing: border-box;
            margin: 0;
            padding: 0;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #1a1a2e;
            color: #eee;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .header {
            background: #16213e;
            padding: 12px 20px;
            display: flex;
            align-items: center;
            gap: 16px;
            border-bottom: 1px solid #0f3460;
        }

        .title {
            font-size: 18px;
            font-weight: 600;
            color: #e94560;
        }

        .endpoint {
            font-family: monospace;
            font-size: 13px;
            color: #aaa;
        }

        .phase {
            font-size: 12px;
            padding: 2px 8px;
            border-radius: 4px;
            background: #0f3460;
        }

        .phase.open { background: #1b5e20; }
        .phase.closed { background: #7f1d1d; }

        .composer {
            padding: 12px 20px;
            display: flex;
            flex-direction: column;
            gap: 8px;
        }

        .templates {
            display: flex;
            flex-wrap: wrap;
            gap: 6px;
        }

        button {
            background: #0f3460;
            color: #eee;
            border: 1px solid #e94560;
            border-radius: 4px;
            padding: 4px 12px;
            cursor: pointer;
        }

        button:hover { background: #e94560; }

        textarea {
            width: 100%;
            min-height: 160px;
            font-family: monospace;
            font-size: 13px;
            background: #0b0b1a;
            color: #eee;
            border: 1px solid #0f3460;
            padding: 8px;
        }

        #log {
            flex: 1;
            padding: 0 20px 20px;
            overflow-y: auto;
        }

        #log pre {
            font-size: 12px;
            background: #16213e;
            border-left: 3px solid #0f3460;
            padding: 8px;
            margin-bottom: 6px;
            white-space: pre-wrap;
            word-break: break-all;
        }

        #log pre.raw { border-left-color: #e94560; }
    </style>
</head>
<body>
    <div class="header">
        <span class="title">wsdebug</span>
        <span class="endpoint" id="endpoint"></span>
        <span class="phase" id="phase">connecting</span>
    </div>
    <div class="composer">
        <div class="templates" id="templates"></div>
        <textarea id="message" spellcheck="false"></textarea>
        <div><button id="send">Send</button></div>
    </div>
    <div id="log"></div>

    <script>
        const CLOSE_REASONS = {
            1001: 'Endpoint going away.',
            1002: 'Protocol error.',
            1003: 'Unsupported message.',
            1005: 'No status.',
            1006: 'Abnormal disconnection.',
            1009: 'Data frame too large.'
        };

        let ws = null;
        let profile = null;

        function setPhase(name) {
            const el = document.getElementById('phase');
            el.textContent = name;
            el.className = 'phase ' + name;
        }

        function render(raw) {
            const limit = profile.truncate_at;
            try {
                const value = JSON.parse(raw);
                const text = JSON.stringify(value, function (key, v) {
                    if (typeof v === 'string' && v.length > limit) {
                        return v.substring(0, limit) + '...';
                    }
                    return v;
                }, 2);
                return { text: text, json: true };
            } catch (e) {
                console.log('Parsing Error: ' + e.message);
                return { text: raw, json: false };
            }
        }

        function prepend(rendered) {
            const pre = document.createElement('pre');
            pre.textContent = rendered.text;
            if (!rendered.json) {
                pre.className = 'raw';
            }
            const log = document.getElementById('log');
            log.insertBefore(pre, log.firstChild);
        }

        function bindTemplates() {
            const bar = document.getElementById('templates');
            const message = document.getElementById('message');
            profile.templates.forEach(function (t) {
                const button = document.createElement('button');
                button.textContent = t.name;
                button.addEventListener('click', function () {
                    message.value = t.body;
                });
                bar.appendChild(button);
            });
        }

        function submit() {
            if (!ws || ws.readyState !== WebSocket.OPEN) {
                return;
            }
            const message = document.getElementById('message');
            if (message.value) {
                ws.send(message.value);
            }
            if (profile.clear_on_send) {
                message.value = '';
            }
        }

        function connect() {
            ws = new WebSocket(profile.url);
            ws.binaryType = 'arraybuffer';

            ws.onopen = function () {
                setPhase('open');
            };

            ws.onmessage = function (event) {
                var text = event.data instanceof ArrayBuffer
                    ? new TextDecoder().decode(event.data)
                    : String(event.data);
                prepend(render(text));
            };

            ws.onerror = function (event) {
                console.error('WebSocket error', event);
            };

            ws.onclose = function (event) {
                setPhase('closed');
                const reason = CLOSE_REASONS[event.code] || 'Unknown Error';
                alert('Connection closed, ' + event.code + ' - ' + reason);
            };
        }

        fetch('/profile')
            .then(function (response) { return response.json(); })
            .then(function (p) {
                profile = p;
                document.getElementById('endpoint').textContent = p.name + ' @ ' + p.url;
                bindTemplates();
                document.getElementById('send').addEventListener('click', submit);
                connect();
            })
            .catch(function (e) {
                console.error('Failed to load profile', e);
            });
    </script>
</body>
</html>
"#;
