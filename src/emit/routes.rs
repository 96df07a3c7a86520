//! Route-registration variant.

use std::io::{self, Write};

use super::{Emit, c_string, content_type, write_arrays, write_preamble};
use crate::asset::Manifest;
use crate::config::{EmbedConfig, RoutesConfig};

/// Byte arrays plus a function binding every request path to a handler
/// that replies with the gzip payload.
///
/// ```text
/// void setup_static_endpoints(ESP8266WebServer & server,
///         std::function<void()> pre,
///         std::function<void()> post) {
///     {
///         auto handler = [&server, pre, post] {
///             if (pre) pre();
///             server.sendHeader("Content-Encoding", "gzip");
///             server.send_P(200, "text/html", (PGM_P)INDEX_HTML, 1234);
///             if (post) post();
///         };
///         server.on("/index.html", HTTP_GET, handler);
///         server.on("/", HTTP_GET, handler);
///     }
/// }
/// ```
///
/// `pre`/`post` default to `nullptr` in the forward declaration, so the
/// firmware may call `setup_static_endpoints(server)`.
pub struct RoutesEmitter<'a> {
    embed: &'a EmbedConfig,
    routes: &'a RoutesConfig,
}

impl<'a> RoutesEmitter<'a> {
    pub const fn new(embed: &'a EmbedConfig, routes: &'a RoutesConfig) -> Self {
        Self { embed, routes }
    }

    fn write_signature(&self, out: &mut dyn Write, defaults: bool) -> io::Result<()> {
        let default = if defaults { " = nullptr" } else { "" };
        let cont = " ".repeat(self.embed.indent * 2);
        writeln!(
            out,
            "void {}({} & server,",
            self.routes.function, self.routes.server
        )?;
        writeln!(out, "{cont}std::function<void()> pre{default},")?;
        write!(out, "{cont}std::function<void()> post{default})")
    }
}

impl Emit for RoutesEmitter<'_> {
    fn emit(&self, manifest: &Manifest, out: &mut dyn Write) -> io::Result<()> {
        let includes = [
            format!("#include <{}>", self.routes.include),
            "#include <functional>".to_string(),
        ];
        write_preamble(out, &includes)?;
        write_arrays(out, manifest.assets(), self.embed)?;

        writeln!(out)?;
        self.write_signature(out, true)?;
        writeln!(out, ";")?;
        writeln!(out)?;
        self.write_signature(out, false)?;
        writeln!(out, " {{")?;

        let i1 = " ".repeat(self.embed.indent);
        let i2 = i1.repeat(2);
        let i3 = i1.repeat(3);

        for asset in manifest.assets() {
            let mime = content_type(asset.mime, self.embed);

            writeln!(out, "{i1}{{")?;
            writeln!(out, "{i2}auto handler = [&server, pre, post] {{")?;
            writeln!(out, "{i3}if (pre) pre();")?;
            writeln!(out, "{i3}server.sendHeader(\"Content-Encoding\", \"gzip\");")?;
            writeln!(
                out,
                "{i3}server.send_P(200, {}, (PGM_P){}, {});",
                c_string(mime),
                asset.symbol,
                asset.size()
            )?;
            writeln!(out, "{i3}if (post) post();")?;
            writeln!(out, "{i2}}};")?;
            for route in &asset.routes {
                writeln!(out, "{i2}server.on({}, HTTP_GET, handler);", c_string(route))?;
            }
            writeln!(out, "{i1}}}")?;
        }

        writeln!(out, "}}")
    }
}
