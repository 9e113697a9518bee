//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# tabbridge configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[connection]
# url = "ws://localhost:3000"   # front-end WebSocket endpoint (ws:// or wss://)
# enabled = true

[engine]
# initial_url = "https://www.google.com"
# cache_path = ""               # empty = platform cache dir
# switches = ["disable-gpu", "disable-gpu-compositing", "disable-software-rasterizer",
#             "in-process-gpu", "disable-extensions", "disable-plugins"]
# no_sandbox = true
# javascript = true
# local_storage = true
# databases = true
# webgl = true

[window]
# width = 1024                  # 200-10000
# height = 768                  # 200-10000
# title = "Lightweight Browser"

[tabs]
# default_title = "New Tab"
# blank_url = "about:blank"

[keybinds]
# new_tab = "Ctrl+T"
# close_tab = "Ctrl+W"

[logging]
# level = "INFO"                # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
