//! The read-only sample project shown in the explorer sidebar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Language of a project file, used for the status bar and token highlighting.
pub enum Language {
    /// `.tsx` sources.
    TypeScript,
    /// Stylesheets.
    Css,
    /// Manifests and configs.
    Json,
    /// Documentation.
    Markdown,
    /// Non-text assets.
    Binary,
}

impl Language {
    /// Status bar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Binary => "binary",
        }
    }

    /// CSS modifier for the file glyph color.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::TypeScript => "lang-typescript",
            Self::Css => "lang-css",
            Self::Json => "lang-json",
            Self::Markdown => "lang-markdown",
            Self::Binary => "lang-binary",
        }
    }

    /// Whether keyword and string highlighting applies.
    pub const fn is_script(self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Folder or file in the sample project tree.
pub enum ProjectNode {
    /// Folder with children.
    Folder {
        /// Display name.
        name: &'static str,
        /// Absolute path, also the tree key.
        path: &'static str,
        /// Whether the folder starts expanded.
        expanded: bool,
        /// Children in display order.
        children: &'static [ProjectNode],
    },
    /// Leaf file.
    File {
        /// Display name.
        name: &'static str,
        /// Absolute path, also the tab key.
        path: &'static str,
        /// File language.
        language: Language,
    },
}

impl ProjectNode {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => *name,
        }
    }

    /// Absolute path.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Folder { path, .. } | Self::File { path, .. } => *path,
        }
    }
}

/// Top-level entries of the sample project.
pub static PROJECT_TREE: [ProjectNode; 5] = [
    ProjectNode::Folder {
        name: "src",
        path: "/src",
        expanded: true,
        children: &[
            ProjectNode::Folder {
                name: "app",
                path: "/src/app",
                expanded: true,
                children: &[
                    ProjectNode::File {
                        name: "page.tsx",
                        path: "/src/app/page.tsx",
                        language: Language::TypeScript,
                    },
                    ProjectNode::File {
                        name: "layout.tsx",
                        path: "/src/app/layout.tsx",
                        language: Language::TypeScript,
                    },
                    ProjectNode::File {
                        name: "globals.css",
                        path: "/src/app/globals.css",
                        language: Language::Css,
                    },
                ],
            },
            ProjectNode::Folder {
                name: "components",
                path: "/src/components",
                expanded: true,
                children: &[
                    ProjectNode::File {
                        name: "desktop-interface.tsx",
                        path: "/src/components/desktop-interface.tsx",
                        language: Language::TypeScript,
                    },
                    ProjectNode::File {
                        name: "window.tsx",
                        path: "/src/components/window.tsx",
                        language: Language::TypeScript,
                    },
                    ProjectNode::File {
                        name: "dock.tsx",
                        path: "/src/components/dock.tsx",
                        language: Language::TypeScript,
                    },
                ],
            },
        ],
    },
    ProjectNode::Folder {
        name: "public",
        path: "/public",
        expanded: false,
        children: &[ProjectNode::File {
            name: "favicon.ico",
            path: "/public/favicon.ico",
            language: Language::Binary,
        }],
    },
    ProjectNode::File {
        name: "package.json",
        path: "/package.json",
        language: Language::Json,
    },
    ProjectNode::File {
        name: "tsconfig.json",
        path: "/tsconfig.json",
        language: Language::Json,
    },
    ProjectNode::File {
        name: "README.md",
        path: "/README.md",
        language: Language::Markdown,
    },
];

/// Paths of folders that start expanded.
pub fn initially_expanded() -> Vec<&'static str> {
    fn walk(nodes: &'static [ProjectNode], out: &mut Vec<&'static str>) {
        for node in nodes {
            if let ProjectNode::Folder {
                path,
                expanded,
                children,
                ..
            } = node
            {
                if *expanded {
                    out.push(*path);
                }
                walk(children, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(&PROJECT_TREE, &mut out);
    out
}

/// Text of the file at `path`, or a placeholder comment for unknown paths.
pub fn file_content(path: &str) -> String {
    let content = match path {
        "/src/app/page.tsx" => PAGE_TSX,
        "/src/app/layout.tsx" => LAYOUT_TSX,
        "/src/app/globals.css" => GLOBALS_CSS,
        "/src/components/desktop-interface.tsx" => DESKTOP_INTERFACE_TSX,
        "/src/components/window.tsx" => WINDOW_TSX,
        "/src/components/dock.tsx" => DOCK_TSX,
        "/package.json" => PACKAGE_JSON,
        "/tsconfig.json" => TSCONFIG_JSON,
        "/README.md" => README_MD,
        _ => return format!("// No content available for {path}"),
    };
    content.to_string()
}

const PAGE_TSX: &str = r#"import DesktopInterface from "@/components/desktop-interface"

export default function Home() {
  return (
    <main className="h-screen w-screen overflow-hidden">
      <DesktopInterface />
    </main>
  )
}"#;

const LAYOUT_TSX: &str = r#"export const metadata = {
  title: 'WebOS',
  description: 'A web-based operating system interface',
}

export default function RootLayout({
  children,
}: {
  children: React.ReactNode
}) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  )
}"#;

const GLOBALS_CSS: &str = r#":root {
  --foreground-rgb: 0, 0, 0;
  --background-start-rgb: 214, 219, 220;
  --background-end-rgb: 255, 255, 255;
}

@media (prefers-color-scheme: dark) {
  :root {
    --foreground-rgb: 255, 255, 255;
    --background-start-rgb: 0, 0, 0;
    --background-end-rgb: 0, 0, 0;
  }
}

body {
  color: rgb(var(--foreground-rgb));
}"#;

const DESKTOP_INTERFACE_TSX: &str = r#""use client"

import { useState, useEffect } from "react"
import Dock from "@/components/dock"
import Menubar from "@/components/menubar"
import Desktop from "@/components/desktop"
import Window from "@/components/window"
// ... more code here"#;

const WINDOW_TSX: &str = r#""use client"

import { useState, useRef, useEffect } from "react"

interface WindowProps {
  id: string
  title: string
  icon: string
  isActive: boolean
  onClose: () => void
  onMinimize: () => void
  onActivate: () => void
}

export default function Window(props: WindowProps) {
  // ... window component code
}"#;

const DOCK_TSX: &str = r#""use client"

interface DockApp {
  id: string
  title: string
  icon: string
}

export default function Dock({ apps }: { apps: DockApp[] }) {
  // ... dock component code
}"#;

const PACKAGE_JSON: &str = r#"{
  "name": "webos",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start"
  },
  "dependencies": {
    "react": "18.2.0",
    "react-dom": "18.2.0"
  }
}"#;

const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "target": "es5",
    "lib": ["dom", "dom.iterable", "esnext"],
    "strict": true,
    "noEmit": true,
    "module": "esnext",
    "jsx": "preserve"
  },
  "exclude": ["node_modules"]
}"#;

const README_MD: &str = r#"# WebOS

A web-based operating system interface.

## Features

- Desktop environment with icons and wallpaper
- Draggable and resizable windows
- macOS-style dock
- Top menu bar with dropdown menus
- Dark mode / light mode toggle"#;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn src_folders_start_expanded_and_public_collapsed() {
        assert_eq!(
            initially_expanded(),
            vec!["/src", "/src/app", "/src/components"]
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_placeholder() {
        assert_eq!(
            file_content("/public/favicon.ico"),
            "// No content available for /public/favicon.ico"
        );
        assert!(file_content("/package.json").contains("\"name\": \"webos\""));
    }
}
