/// A host USB device handed to the guest through an xHCI controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsbPassthrough {
    /// Selected by where it is plugged in on the host.
    HostLocation { bus: String, addr: String },
    /// Selected by USB vendor/product id.
    Identity { vendor: String, product: String },
}

impl UsbPassthrough {
    /// Pick a passthrough device from the `run` options.
    ///
    /// A complete bus/address pair takes precedence over a complete
    /// vendor/product pair. Incomplete pairs select nothing; an empty id
    /// counts as missing.
    pub fn select(
        hostbus: Option<&str>,
        hostaddr: Option<&str>,
        vendorid: Option<&str>,
        productid: Option<&str>,
    ) -> Option<Self> {
        fn given(id: Option<&str>) -> Option<&str> {
            id.filter(|id| !id.is_empty())
        }
        let [hostbus, hostaddr, vendorid, productid] =
            [hostbus, hostaddr, vendorid, productid].map(given);

        let by_location = hostbus.zip(hostaddr).map(|(bus, addr)| Self::HostLocation {
            bus: bus.to_string(),
            addr: addr.to_string(),
        });
        let by_identity = vendorid.zip(productid).map(|(vendor, product)| Self::Identity {
            vendor: vendor.to_string(),
            product: product.to_string(),
        });

        match (by_location, by_identity) {
            (Some(location), Some(_)) => {
                log::warn!("--hostbus/--hostaddr given, ignoring --vendorid/--productid");
                Some(location)
            }
            (location, identity) => location.or(identity),
        }
    }

    /// The `usb-host` device spec, attached to the `xhci` controller.
    pub fn device_spec(&self) -> String {
        match self {
            Self::HostLocation { bus, addr } => {
                format!("usb-host,bus=xhci.0,hostbus={bus},hostaddr={addr}")
            }
            Self::Identity { vendor, product } => {
                format!("usb-host,bus=xhci.0,vendorid={vendor},productid={product}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_wins_over_identity() {
        let usb = UsbPassthrough::select(Some("3"), Some("7"), Some("0x1234"), Some("0x5678"));
        assert_eq!(
            usb,
            Some(UsbPassthrough::HostLocation {
                bus: "3".into(),
                addr: "7".into()
            })
        );
    }

    #[test]
    fn test_identity_when_location_incomplete() {
        let usb = UsbPassthrough::select(Some("3"), None, Some("0x1234"), Some("0x5678"));
        assert_eq!(
            usb,
            Some(UsbPassthrough::Identity {
                vendor: "0x1234".into(),
                product: "0x5678".into()
            })
        );
    }

    #[test]
    fn test_incomplete_pairs_select_nothing() {
        assert_eq!(UsbPassthrough::select(None, None, None, None), None);
        assert_eq!(UsbPassthrough::select(Some("3"), None, None, Some("0x5678")), None);
        assert_eq!(UsbPassthrough::select(None, Some("7"), Some("0x1234"), None), None);
        assert_eq!(UsbPassthrough::select(Some(""), Some("7"), None, None), None);
    }

    #[test]
    fn test_device_spec() {
        let location = UsbPassthrough::HostLocation {
            bus: "1".into(),
            addr: "4".into(),
        };
        assert_eq!(location.device_spec(), "usb-host,bus=xhci.0,hostbus=1,hostaddr=4");

        let identity = UsbPassthrough::Identity {
            vendor: "0x0781".into(),
            product: "0x5567".into(),
        };
        assert_eq!(
            identity.device_spec(),
            "usb-host,bus=xhci.0,vendorid=0x0781,productid=0x5567"
        );
    }
}
