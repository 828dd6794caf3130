//! Canned `xcodebuild` output for tests.

/// `xcodebuild -list` for a plain project.
pub const STANDARD_PROJECT_LIST: &str = r#"Command line invocation:
    /Applications/Xcode.app/Contents/Developer/usr/bin/xcodebuild -list -project /src/Example/Example.xcodeproj

Information about project "Example":
    Targets:
        Example
        ExampleUITests

    Build Configurations:
        Debug
        Release

    If no build configuration is specified and -scheme is not passed then "Release" is used.

    Schemes:
        Example
        ExampleUITests
"#;

/// `xcodebuild -list` for a CocoaPods-managed workspace.
pub const COCOAPODS_WORKSPACE_LIST: &str = r#"Information about workspace "Example":
    Schemes:
        Example
        HexColors
        Pods-Example
"#;

/// `xcodebuild -list` for a workspace without schemes.
pub const EMPTY_WORKSPACE_LIST: &str = r#"There are no schemes in workspace "Example".
"#;

/// `xcodebuild -list` for a project without schemes.
pub const EMPTY_PROJECT_LIST: &str = r#"Information about project "Example":
    Targets:
        Example

    Build Configurations:
        Debug
        Release

    If no build configuration is specified and -scheme is not passed then "Release" is used.

    This project contains no schemes.
"#;

/// `xcodebuild -showBuildSettings` for an iOS app.
pub const IOS_BUILD_SETTINGS: &str = r#"Build settings for action build and target Example:
    ACTION = build
    CONFIGURATION = Release
    PLATFORM_DISPLAY_NAME = iOS
    PLATFORM_NAME = iphoneos
    PRODUCT_BUNDLE_IDENTIFIER = tools.fastlane.example
    PRODUCT_NAME = Example
    SDKROOT = /Applications/Xcode.app/Contents/Developer/Platforms/iPhoneOS.platform/Developer/SDKs/iPhoneOS17.5.sdk
    TARGET_NAME = Example
    WRAPPER_EXTENSION = app
    WRAPPER_NAME = Example.app
    WRAPPER_SUFFIX = .app
"#;

/// `xcodebuild -showBuildSettings` for a macOS app with a test target.
pub const MACOS_BUILD_SETTINGS: &str = r#"Build settings for action build and target Example:
    ACTION = build
    PLATFORM_DISPLAY_NAME = macOS
    PLATFORM_NAME = macosx
    TARGET_NAME = Example
    WRAPPER_NAME = Example.app
    WRAPPER_SUFFIX = .app

Build settings for action build and target ExampleTests:
    ACTION = build
    PLATFORM_NAME = iphonesimulator
    TARGET_NAME = ExampleTests
    WRAPPER_NAME = ExampleTests.xctest
    WRAPPER_SUFFIX = .xctest
"#;
