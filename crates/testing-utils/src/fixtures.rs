//! Lockfiles shared by the tests of several crates.

use text_block_macros::text_block_fnl;

/// `left-pad@^1.0.0` on 1.0.1 next to `left-pad@^1.1.0` on 1.1.0.
pub const LEFT_PAD: &str = text_block_fnl! {
    "# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY."
    "# yarn lockfile v1"
    ""
    ""
    "left-pad@^1.0.0:"
    "  version \"1.0.1\""
    "  resolved \"https://registry.yarnpkg.com/left-pad/-/left-pad-1.0.1.tgz#0a1b2c3d\""
    "  integrity sha512-left-pad-1.0.1"
    ""
    "left-pad@^1.1.0:"
    "  version \"1.1.0\""
    "  resolved \"https://registry.yarnpkg.com/left-pad/-/left-pad-1.1.0.tgz#1c2f3e4d\""
    "  integrity sha512-left-pad-1.1.0"
};

/// Two major versions of `foo` that no single version can satisfy.
pub const DISJOINT: &str = text_block_fnl! {
    "# yarn lockfile v1"
    ""
    ""
    "foo@^1.0.0:"
    "  version \"1.2.0\""
    "  resolved \"https://registry.yarnpkg.com/foo/-/foo-1.2.0.tgz#5e6f7a8b\""
    ""
    "foo@^2.0.0:"
    "  version \"2.0.0\""
    "  resolved \"https://registry.yarnpkg.com/foo/-/foo-2.0.0.tgz#9c0d1e2f\""
};

/// Three descriptors of `bar` on two versions, all compatible with `^1.0.0`.
pub const MOST_COMMON: &str = text_block_fnl! {
    "# yarn lockfile v1"
    ""
    ""
    "bar@1.x, bar@^1.0.0:"
    "  version \"1.0.0\""
    "  resolved \"https://registry.yarnpkg.com/bar/-/bar-1.0.0.tgz#aa00aa00\""
    ""
    "\"bar@>=1.0.0 <2\":"
    "  version \"1.1.0\""
    "  resolved \"https://registry.yarnpkg.com/bar/-/bar-1.1.0.tgz#bb11bb11\""
};

/// Pre-releases of the current and of the next major of `x`.
pub const PRERELEASE: &str = text_block_fnl! {
    "# yarn lockfile v1"
    ""
    ""
    "x@^1.0.0:"
    "  version \"1.0.0\""
    ""
    "x@1.0.1-beta:"
    "  version \"1.0.1-beta\""
    ""
    "x@2.0.0-alpha:"
    "  version \"2.0.0-alpha\""
};

/// A realistic mix: scoped packages, aliases, dist-tags, pre-releases and nested dependencies.
pub const MIXED: &str = text_block_fnl! {
    "# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY."
    "# yarn lockfile v1"
    ""
    ""
    "\"@babel/code-frame@^7.0.0\":"
    "  version \"7.8.3\""
    "  resolved \"https://registry.yarnpkg.com/@babel/code-frame/-/code-frame-7.8.3.tgz\""
    "  dependencies:"
    "    \"@babel/highlight\" \"^7.8.3\""
    ""
    "\"@babel/code-frame@^7.10.4\", \"@babel/code-frame@^7.8.3\":"
    "  version \"7.10.4\""
    "  resolved \"https://registry.yarnpkg.com/@babel/code-frame/-/code-frame-7.10.4.tgz\""
    "  dependencies:"
    "    \"@babel/highlight\" \"^7.10.4\""
    ""
    "\"@babel/highlight@^7.10.4\", \"@babel/highlight@^7.8.3\":"
    "  version \"7.10.4\""
    "  resolved \"https://registry.yarnpkg.com/@babel/highlight/-/highlight-7.10.4.tgz\""
    ""
    "\"@types/node@*\":"
    "  version \"14.0.1\""
    "  resolved \"https://registry.yarnpkg.com/@types/node/-/node-14.0.1.tgz\""
    ""
    "\"@types/node@^14.0.0\":"
    "  version \"14.0.5\""
    "  resolved \"https://registry.yarnpkg.com/@types/node/-/node-14.0.5.tgz\""
    ""
    "debug@^4.1.0:"
    "  version \"4.1.0\""
    "  resolved \"https://registry.yarnpkg.com/debug/-/debug-4.1.0.tgz\""
    "  dependencies:"
    "    ms \"^2.1.1\""
    ""
    "debug@^4.1.1, debug@latest:"
    "  version \"4.3.1\""
    "  resolved \"https://registry.yarnpkg.com/debug/-/debug-4.3.1.tgz\""
    "  dependencies:"
    "    ms \"2.1.2\""
    ""
    "ms@2.1.2, ms@^2.1.1:"
    "  version \"2.1.2\""
    "  resolved \"https://registry.yarnpkg.com/ms/-/ms-2.1.2.tgz\""
    ""
    "\"my-debug@npm:debug@^4.0.0\":"
    "  version \"4.1.0\""
    "  resolved \"https://registry.yarnpkg.com/debug/-/debug-4.1.0.tgz\""
    "  dependencies:"
    "    ms \"^2.1.1\""
    ""
    "typescript@^4.0.0:"
    "  version \"4.0.2\""
    "  resolved \"https://registry.yarnpkg.com/typescript/-/typescript-4.0.2.tgz\""
    ""
    "typescript@^4.0.0-beta:"
    "  version \"4.0.0-beta\""
    "  resolved \"https://registry.yarnpkg.com/typescript/-/typescript-4.0.0-beta.tgz\""
    ""
    "typescript@^4.0.1-rc:"
    "  version \"4.0.1-rc\""
    "  resolved \"https://registry.yarnpkg.com/typescript/-/typescript-4.0.1-rc.tgz\""
};
