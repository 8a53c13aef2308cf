use regex::Regex;

use super::spdx::canonical_tag;

/// How far into the flattened text a license title is looked for.
const HEAD_CHARS: usize = 1000;

/// Guess the SPDX identifier of a license file from its text.
///
/// Checks, in order: an explicit `SPDX-License-Identifier:` tag, a GNU license
/// title near the top of the file, other well-known license titles, and finally
/// grant phrases from permissive licenses that usually ship without a title.
/// Returns `None` for text that matches none of them.
pub fn identify(text: &str) -> Option<String> {
    if let Some(id) = spdx_tag(text) {
        return Some(id);
    }

    let flat = flatten(text);
    if flat.is_empty() {
        return None;
    }
    let head: String = flat.chars().take(HEAD_CHARS).collect();

    gnu_title(&head)
        .or_else(|| other_title(&head))
        .or_else(|| grant_phrase(&flat))
        .map(str::to_string)
}

/// Lowercase and collapse every whitespace run to a single space.
fn flatten(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn spdx_tag(text: &str) -> Option<String> {
    let re = Regex::new(r"(?im)^[\s#/*-]*SPDX-License-Identifier:\s*(.+?)\s*$").ok()?;
    let caps = re.captures(text)?;
    Some(canonical_tag(&caps[1]))
}

fn gnu_title(head: &str) -> Option<&'static str> {
    let re = Regex::new(
        r"gnu (affero |lesser |library )?general public license(?: as published by the free software foundation)?,? (?:either )?version (\d(?:\.\d)?)",
    )
    .ok()?;
    let caps = re.captures(head)?;
    let variant = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
    let version = &caps[2];

    let id = match (variant, version) {
        ("affero", "3" | "3.0") => "AGPL-3.0",
        ("lesser", "3" | "3.0") => "LGPL-3.0",
        ("lesser", "2.1") => "LGPL-2.1",
        ("library", "2" | "2.0") => "LGPL-2.0",
        ("", "3" | "3.0") => "GPL-3.0",
        ("", "2" | "2.0") => "GPL-2.0",
        ("", "1" | "1.0") => "GPL-1.0",
        _ => return None,
    };
    Some(id)
}

fn other_title(head: &str) -> Option<&'static str> {
    if head.contains("apache license") && head.contains("version 2.0") {
        return Some("Apache-2.0");
    }
    if head.contains("mozilla public license version 2.0")
        || head.contains("mozilla public license, version 2.0")
    {
        return Some("MPL-2.0");
    }
    if head.contains("cc0 1.0 universal") {
        return Some("CC0-1.0");
    }
    None
}

fn grant_phrase(flat: &str) -> Option<&'static str> {
    if flat.contains("this is free and unencumbered software released into the public domain") {
        return Some("Unlicense");
    }

    if flat.contains("permission is hereby granted, free of charge, to any person obtaining a copy") {
        return if flat.contains("shall be included in all copies") {
            Some("MIT")
        } else {
            Some("MIT-0")
        };
    }

    if flat.contains("redistribution and use in source and binary forms") {
        return if flat.contains("endorse or promote products derived") {
            Some("BSD-3-Clause")
        } else {
            Some("BSD-2-Clause")
        };
    }

    let isc = Regex::new(
        r"permission to use, copy, modify, (?:and/or |and )?distribute this software for any purpose with or without fee is hereby granted",
    )
    .ok()?;
    if isc.is_match(flat) {
        return if flat.contains("appear in all copies") {
            Some("ISC")
        } else {
            Some("0BSD")
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIT: &str = "MIT License

Copyright (c) 2023 Example Org

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction.

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
";

    const GPL3: &str = "                    GNU GENERAL PUBLIC LICENSE
                       Version 3, 29 June 2007

 Copyright (C) 2007 Free Software Foundation, Inc. <https://fsf.org/>
";

    const GPL2: &str = "                    GNU GENERAL PUBLIC LICENSE
                       Version 2, June 1991

This General Public License does not permit incorporating your program into
proprietary programs. If your program is a subroutine library, you may
consider it more useful to permit linking proprietary applications with the
library. If this is what you want to do, use the GNU Lesser General Public
License instead of this License.
";

    #[test]
    fn test_mit() {
        assert_eq!(identify(MIT).as_deref(), Some("MIT"));
    }

    #[test]
    fn test_gpl_titles() {
        assert_eq!(identify(GPL3).as_deref(), Some("GPL-3.0"));
        assert_eq!(identify(GPL2).as_deref(), Some("GPL-2.0"));
    }

    #[test]
    fn test_gpl_notice_header() {
        let text = "This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.";
        assert_eq!(identify(text).as_deref(), Some("GPL-3.0"));
    }

    #[test]
    fn test_lesser_and_affero() {
        let lgpl = "GNU LESSER GENERAL PUBLIC LICENSE\n Version 2.1, February 1999";
        let agpl = "GNU AFFERO GENERAL PUBLIC LICENSE\n Version 3, 19 November 2007";
        assert_eq!(identify(lgpl).as_deref(), Some("LGPL-2.1"));
        assert_eq!(identify(agpl).as_deref(), Some("AGPL-3.0"));
    }

    #[test]
    fn test_apache() {
        let text = "\n                                 Apache License\n                           Version 2.0, January 2004\n";
        assert_eq!(identify(text).as_deref(), Some("Apache-2.0"));
    }

    #[test]
    fn test_bsd_variants() {
        let two = "Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:";
        let three = format!(
            "{}\nNeither the name of the copyright holder nor the names of its contributors
may be used to endorse or promote products derived from this software.",
            two
        );
        assert_eq!(identify(two).as_deref(), Some("BSD-2-Clause"));
        assert_eq!(identify(&three).as_deref(), Some("BSD-3-Clause"));
    }

    #[test]
    fn test_isc() {
        let text = "Permission to use, copy, modify, and/or distribute this software for any
purpose with or without fee is hereby granted, provided that the above
copyright notice and this permission notice appear in all copies.";
        assert_eq!(identify(text).as_deref(), Some("ISC"));
    }

    #[test]
    fn test_spdx_tag() {
        let text = "# SPDX-License-Identifier: GPL-3.0-or-later\nsee COPYING for details";
        assert_eq!(identify(text).as_deref(), Some("GPL-3.0-or-later"));

        let deprecated = "// SPDX-License-Identifier: GPL-2.0+\n";
        assert_eq!(identify(deprecated).as_deref(), Some("GPL-2.0-or-later"));
    }

    #[test]
    fn test_gibberish() {
        assert_eq!(identify("lorem ipsum dolor sit amet"), None);
        assert_eq!(identify("   \n\n"), None);
    }
}
