//! Project template: the static tree descriptor
//!
//! Declares every directory and file of the generated layout with its literal
//! placeholder content. The two fully-formed entry files are embedded in the
//! binary at build time.

use crate::tree::node::Node;

/// Project name used when the caller does not supply one
pub const DEFAULT_PROJECT_NAME: &str = "fluentfox";

/// Application entry files embedded at compile time
const APP_TSX: &str = include_str!("templates/App.tsx");
const MAIN_TSX: &str = include_str!("templates/main.tsx");

/// Directory groups listed in the success summary, with their descriptions.
///
/// Informational only; intentionally coarser than the full tree.
pub const DIRECTORY_SUMMARY: &[(&str, &str)] = &[
    ("src/components/common", "Reusable UI components"),
    ("src/components/layout", "Layout components"),
    ("src/pages", "Page-level components"),
    ("src/hooks", "Custom React hooks"),
    ("src/services", "API and external services"),
    ("src/utils", "Utility functions"),
    ("src/styles", "Global styles and themes"),
    ("src/assets", "Static assets"),
];

/// The complete scaffold layout.
///
/// Deterministic and free of I/O; constructing it cannot fail. Insertion
/// order of siblings defines creation order.
pub fn project_tree() -> Node {
    Node::dir(vec![
        (
            "public".to_string(),
            Node::dir(vec![
                ("favicon.ico".to_string(), Node::file("")),
                ("robots.txt".to_string(), Node::file("User-agent: *\nDisallow:")),
            ]),
        ),
        (
            "src".to_string(),
            Node::dir(vec![
                (
                    "assets".to_string(),
                    Node::dir(vec![
                        ("images".to_string(), Node::dir(vec![])),
                        ("icons".to_string(), Node::dir(vec![])),
                        ("fonts".to_string(), Node::dir(vec![])),
                    ]),
                ),
                (
                    "components".to_string(),
                    Node::dir(vec![
                        (
                            "common".to_string(),
                            Node::dir(vec![
                                component("Button", "// Common Button component", "/* Button styles */"),
                                component("Modal", "// Common Modal component", "/* Modal styles */"),
                            ]),
                        ),
                        (
                            "layout".to_string(),
                            Node::dir(vec![
                                component("Header", "// Header component", "/* Header styles */"),
                                component("Footer", "// Footer component", "/* Footer styles */"),
                                component("Sidebar", "// Sidebar component", "/* Sidebar styles */"),
                            ]),
                        ),
                        ("ui".to_string(), Node::dir(vec![])),
                    ]),
                ),
                (
                    "hooks".to_string(),
                    Node::dir(vec![
                        ("useAuth.ts".to_string(), Node::file("// Custom authentication hook")),
                        ("useLocalStorage.ts".to_string(), Node::file("// Local storage hook")),
                        ("index.ts".to_string(), Node::file("// Export all hooks")),
                    ]),
                ),
                (
                    "pages".to_string(),
                    Node::dir(vec![
                        component("Home", "// Home page component", "/* Home page styles */"),
                        component("About", "// About page component", "/* About page styles */"),
                    ]),
                ),
                (
                    "services".to_string(),
                    Node::dir(vec![
                        (
                            "api".to_string(),
                            Node::dir(vec![
                                ("client.ts".to_string(), Node::file("// API client configuration")),
                                ("endpoints.ts".to_string(), Node::file("// API endpoints")),
                                ("types.ts".to_string(), Node::file("// API response types")),
                            ]),
                        ),
                        (
                            "auth".to_string(),
                            Node::dir(vec![
                                ("authService.ts".to_string(), Node::file("// Authentication service")),
                                ("tokenManager.ts".to_string(), Node::file("// Token management")),
                            ]),
                        ),
                    ]),
                ),
                (
                    "styles".to_string(),
                    Node::dir(vec![
                        ("globals.css".to_string(), Node::file("/* Global styles */")),
                        ("variables.css".to_string(), Node::file("/* CSS custom properties */")),
                        ("reset.css".to_string(), Node::file("/* CSS reset styles */")),
                    ]),
                ),
                (
                    "utils".to_string(),
                    Node::dir(vec![
                        ("constants.ts".to_string(), Node::file("// App constants")),
                        ("helpers.ts".to_string(), Node::file("// Utility helper functions")),
                        ("types.ts".to_string(), Node::file("// TypeScript type definitions")),
                        ("validation.ts".to_string(), Node::file("// Form validation utilities")),
                    ]),
                ),
                ("App.tsx".to_string(), Node::file(APP_TSX)),
                ("main.tsx".to_string(), Node::file(MAIN_TSX)),
            ]),
        ),
    ])
}

/// One component module: `<Name>.tsx`, `<Name>.module.css`, and a re-export
/// `index.ts`. Contents are fixed literals; only the assembly is shared.
fn component(name: &str, component_comment: &str, style_comment: &str) -> (String, Node) {
    (
        name.to_string(),
        Node::dir(vec![
            (format!("{}.tsx", name), Node::file(component_comment)),
            (format!("{}.module.css", name), Node::file(style_comment)),
            (
                "index.ts".to_string(),
                Node::file(format!("export {{ default }} from './{}';", name)),
            ),
        ]),
    )
}
