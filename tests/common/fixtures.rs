//! Static catalogs and index documents used across harnesses.

use super::builders::{PackageBuilder, ReleaseBuilder};
use libseek_core::Catalog;

/// A small catalog modelled on real library index entries.
pub fn arduino_catalog() -> Catalog {
    vec![
        PackageBuilder::new("Servo")
            .release(
                ReleaseBuilder::new("1.1.8")
                    .sentence("Allows Arduino boards to control a variety of servo motors.")
                    .paragraph("This library can control a great number of servos."),
            )
            .release(
                ReleaseBuilder::new("1.2.1")
                    .author("Michael Margolis, Arduino")
                    .category("Device Control")
                    .architectures(&["avr", "megaavr", "sam", "samd"])
                    .provides("Servo.h")
                    .sentence("Allows Arduino boards to control a variety of servo motors.")
                    .paragraph("This library can control a great number of servos. It makes careful use of timers."),
            )
            .build(),
        PackageBuilder::new("Stepper")
            .release(
                ReleaseBuilder::new("1.1.3")
                    .category("Device Control")
                    .sentence("Allows Arduino boards to control a variety of stepper motors.")
                    .paragraph("This library allows you to control unipolar or bipolar stepper motors."),
            )
            .build(),
        PackageBuilder::new("WiFi101")
            .release(
                ReleaseBuilder::new("0.16.1")
                    .category("Communication")
                    .dependency("SPI", "")
                    .sentence("Network driver for ATMEL WINC1500 module.")
                    .paragraph("This library implements a network driver for devices based on the ATMEL WINC1500 wifi module."),
            )
            .build(),
        PackageBuilder::new("Adafruit NeoPixel")
            .release(
                ReleaseBuilder::new("1.12.0")
                    .author("Adafruit")
                    .category("Display")
                    .sentence("Arduino library for controlling single-wire-based LED pixels and strip.")
                    .paragraph("Arduino library for controlling single-wire-based LED pixels and strip."),
            )
            .build(),
        PackageBuilder::new("ArduinoJson")
            .release(
                ReleaseBuilder::new("7.0.4")
                    .author("Benoit Blanchon")
                    .category("Data Processing")
                    .sentence("A simple and efficient JSON library for embedded C++.")
                    .paragraph("Supports serialization, deserialization, MessagePack, streams and filtering."),
            )
            .build(),
        PackageBuilder::new("LiquidCrystal")
            .release(
                ReleaseBuilder::new("1.0.7")
                    .category("Display")
                    .sentence("Allows communication with alphanumerical liquid crystal displays (LCDs).")
                    .paragraph("This library allows an Arduino board to control LiquidCrystal displays (LCDs)."),
            )
            .build(),
    ]
    .into_iter()
    .collect()
}

/// Names of [`arduino_catalog`] in catalog order.
pub const ARDUINO_NAMES: &[&str] = &[
    "Servo",
    "Stepper",
    "WiFi101",
    "Adafruit NeoPixel",
    "ArduinoJson",
    "LiquidCrystal",
];

/// A library index document in the flat on-disk format.
pub const LIBRARY_INDEX_JSON: &str = r#"{
  "libraries": [
    {
      "name": "Servo",
      "version": "1.1.8",
      "author": "Michael Margolis, Arduino",
      "maintainer": "Arduino <info@arduino.cc>",
      "sentence": "Allows Arduino boards to control a variety of servo motors.",
      "paragraph": "This library can control a great number of servos.",
      "website": "https://www.arduino.cc/reference/en/libraries/servo/",
      "category": "Device Control",
      "architectures": ["avr", "sam"],
      "types": ["Arduino"],
      "url": "https://downloads.arduino.cc/libraries/github.com/arduino-libraries/Servo-1.1.8.zip",
      "archiveFileName": "Servo-1.1.8.zip",
      "size": 47321,
      "checksum": "SHA-256:1111"
    },
    {
      "name": "Servo",
      "version": "1.2.1",
      "author": "Michael Margolis, Arduino",
      "maintainer": "Arduino <info@arduino.cc>",
      "sentence": "Allows Arduino boards to control a variety of servo motors.",
      "paragraph": "This library can control a great number of servos.",
      "website": "https://www.arduino.cc/reference/en/libraries/servo/",
      "category": "Device Control",
      "architectures": ["avr", "megaavr", "sam", "samd"],
      "types": ["Arduino"],
      "license": "LGPL-2.1",
      "providesIncludes": ["Servo.h"],
      "url": "https://downloads.arduino.cc/libraries/github.com/arduino-libraries/Servo-1.2.1.zip",
      "archiveFileName": "Servo-1.2.1.zip",
      "size": 55034,
      "checksum": "SHA-256:2222"
    },
    {
      "name": "WiFi101",
      "version": "0.16.1",
      "author": "Arduino",
      "maintainer": "Arduino <info@arduino.cc>",
      "sentence": "Network driver for ATMEL WINC1500 module.",
      "paragraph": "This library implements a network driver for devices based on the ATMEL WINC1500 wifi module.",
      "category": "Communication",
      "architectures": ["*"],
      "types": ["Arduino"],
      "dependencies": [{ "name": "SPI" }, { "name": "FlashStorage", "version": ">=1.0.0" }],
      "url": "https://downloads.arduino.cc/libraries/github.com/arduino-libraries/WiFi101-0.16.1.zip",
      "archiveFileName": "WiFi101-0.16.1.zip",
      "size": 2301944,
      "checksum": "SHA-256:3333"
    }
  ]
}"#;
