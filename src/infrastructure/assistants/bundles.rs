use crate::domain::models::ApplianceContext;
use crate::domain::models::Material;
use crate::domain::models::ResponseBundle;
use crate::domain::models::Step;
use crate::domain::models::Tool;

const HOME_DEPOT: &str = "https://www.homedepot.com";

pub(super) fn faucet() -> ResponseBundle {
    return ResponseBundle {
        content: "I'd be happy to help you fix that leaky faucet! First, let me ask a few questions to make sure we tackle this correctly:\n\nIs the leak coming from the spout when the faucet is off, or is it leaking from the base/handle area? Also, what type of faucet do you have - is it a compression faucet (with separate hot and cold handles), a ball-type, cartridge, or ceramic disk faucet?\n\nFor now, I'll guide you through fixing the most common issue - a dripping spout caused by worn washers or O-rings. This is a straightforward fix that most homeowners can handle in about 30-45 minutes. The key is turning off the water supply first and keeping track of the parts as you disassemble the faucet.\n\nBefore we start, do you have a bucket and some towels handy? You'll want to protect your sink and catch any water that might drip out.".to_string(),
        steps: vec![
            Step::with_image(
                "Safety First - Prepare Your Workspace",
                "Before starting any plumbing work, ensure you have proper safety gear including gloves and safety glasses. Clear the area under the sink and lay down towels to protect surfaces. Make sure you know where your main water shut-off is in case of emergency. Never proceed if you're unsure about any step - consult a licensed professional when in doubt.",
                "https://images.unsplash.com/photo-1581166418878-11f0dde922c2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwbHVtYmluZyUyMHBhcnRzJTIwdG9vbHN8ZW58MXx8fHwxNzY2MDU3NjQwfDA&ixlib=rb-4.1.0&q=80&w=1080",
            ),
            Step::with_image(
                "Turn off the water supply",
                "Locate the shut-off valves under the sink and turn them clockwise to stop water flow. Then open the faucet to drain any remaining water. If you can't find shut-off valves under the sink, you may need to turn off the main water supply to your home.",
                "https://images.unsplash.com/photo-1581720604719-ee1b1a4e44b1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx3YXRlciUyMHNodXQlMjBvZmYlMjB2YWx2ZXxlbnwxfHx8fDE3NjYwNTc2Mzl8MA&ixlib=rb-4.1.0&q=80&w=1080",
            ),
            Step::with_image(
                "Remove the faucet handle",
                "Use a screwdriver to remove the decorative cap (usually marked 'H' or 'C'). Unscrew the handle screw underneath and gently pull the handle off to expose the valve stem. If it's stuck, try wiggling it gently or use a handle puller tool.",
                "https://images.unsplash.com/photo-1606619523891-baaf3c312e09?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmYXVjZXQlMjBoYW5kbGUlMjByZW1vdmFsfGVufDF8fHx8MTc2NjA1NzY0M3ww&ixlib=rb-4.1.0&q=80&w=1080",
            ),
            Step::with_image(
                "Replace the O-ring and washer",
                "Remove the old O-ring and washer from the valve stem. Take them to a hardware store to find exact replacements - size matters! Apply a thin coat of plumber's grease to the new O-ring before installation to ensure a good seal.",
                "https://images.unsplash.com/photo-1581166418878-11f0dde922c2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwbHVtYmluZyUyMHBhcnRzJTIwdG9vbHN8ZW58MXx8fHwxNzY2MDU3NjQwfDA&ixlib=rb-4.1.0&q=80&w=1080",
            ),
            Step::with_image(
                "Reassemble and test",
                "Put the faucet back together in reverse order, making sure everything is hand-tight (don't over-tighten!). Turn the water supply back on slowly and check for leaks. Let it run for a minute, then turn it off and wait to see if the drip returns.",
                "https://images.unsplash.com/photo-1662405964427-0e5e4c483a7c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxzaW5rJTIwZmF1Y2V0JTIwcmVwYWlyfGVufDF8fHx8MTc2NjA1NzY0MHww&ixlib=rb-4.1.0&q=80&w=1080",
            ),
        ],
        materials: vec![
            Material::new("Replacement O-rings", Some("2-3 assorted sizes"), Some(HOME_DEPOT)),
            Material::new("Replacement washers", Some("2-3 assorted sizes"), Some(HOME_DEPOT)),
            Material::new("Plumber's grease", Some("1 tube"), Some(HOME_DEPOT)),
            Material::new("Teflon tape", Some("1 roll"), Some(HOME_DEPOT)),
        ],
        tools: vec![
            Tool::new("Adjustable wrench", Some(HOME_DEPOT)),
            Tool::new("Phillips screwdriver", Some(HOME_DEPOT)),
            Tool::new("Flathead screwdriver", Some(HOME_DEPOT)),
            Tool::new("Towel or rag", None),
            Tool::new("Bucket", None),
            Tool::new("Safety glasses", Some(HOME_DEPOT)),
        ],
    };
}

pub(super) fn ceiling_fan() -> ResponseBundle {
    return ResponseBundle {
        content: "Installing a ceiling fan is a great DIY project! I'll guide you through the process safely. First, make sure you have the right electrical box rated for ceiling fans (it should support at least 50 lbs).".to_string(),
        steps: vec![
            Step::new(
                "Turn off power at the breaker",
                "Safety first! Turn off the circuit breaker for the room where you'll be working. Use a voltage tester to confirm power is off.",
            ),
            Step::new(
                "Remove old fixture and install mounting bracket",
                "Take down the existing light fixture. Install the ceiling fan mounting bracket according to the manufacturer's instructions.",
            ),
            Step::new(
                "Wire the ceiling fan",
                "Connect the wires: black to black (hot), white to white (neutral), green or bare copper to ground. Use wire nuts and electrical tape.",
            ),
            Step::new(
                "Attach the fan and test",
                "Mount the fan motor to the bracket, attach the blades, and install the light kit if included. Turn power back on and test all functions.",
            ),
        ],
        materials: vec![
            Material::new("Ceiling fan kit", Some("1"), None),
            Material::new("Wire nuts", Some("4-6"), None),
            Material::new("Electrical tape", Some("1 roll"), None),
        ],
        tools: vec![
            Tool::new("Voltage tester", None),
            Tool::new("Wire strippers", None),
            Tool::new("Phillips screwdriver", None),
            Tool::new("Ladder", None),
            Tool::new("Adjustable wrench", None),
        ],
    };
}

pub(super) fn drywall() -> ResponseBundle {
    return ResponseBundle {
        content: "Patching a hole in drywall is easier than you think! The method depends on the hole size. For small holes (less than 1 inch), you can use spackling paste. For larger holes, you'll need a patch.".to_string(),
        steps: vec![
            Step::new(
                "Clean the area and cut a square",
                "Remove any loose debris around the hole. For holes larger than 1 inch, use a drywall saw to cut a clean square or rectangle around the damage.",
            ),
            Step::new(
                "Install backing support",
                "Cut a piece of wood slightly longer than the hole. Insert it through the hole and secure it with drywall screws on both sides.",
            ),
            Step::new(
                "Cut and attach patch",
                "Cut a drywall patch to fit the hole. Screw it into the backing board. The patch should be flush with the surrounding wall.",
            ),
            Step::new(
                "Apply joint compound and sand",
                "Apply joint compound over the patch and mesh tape. Let it dry, then sand smooth. Apply 2-3 coats, sanding between each. Prime and paint to match.",
            ),
        ],
        materials: vec![
            Material::new("Drywall patch piece", Some("1"), None),
            Material::new("Joint compound", Some("1 container"), None),
            Material::new("Mesh tape", Some("1 roll"), None),
            Material::new("Sandpaper (120 and 220 grit)", Some("assorted"), None),
            Material::new("Primer and paint", Some("as needed"), None),
        ],
        tools: vec![
            Tool::new("Drywall saw", None),
            Tool::new("Putty knife (4-inch and 6-inch)", None),
            Tool::new("Drill/driver", None),
            Tool::new("Sanding block", None),
        ],
    };
}

pub(super) fn appliance(context: Option<&ApplianceContext>) -> ResponseBundle {
    let content = match context {
        Some(context) => format!(
            "Great! I can help you with your {} {} (Model: {}). Having the model number helps me provide specific guidance for your appliance.\n\nWhat seems to be the problem you're experiencing? Common issues with {}s include:\n- Not turning on or no power\n- Unusual noises\n- Poor performance\n- Error codes or lights\n- Leaking (if applicable)\n\nLet me know the specific issue, and I'll walk you through troubleshooting and repair steps tailored to your model.",
            context.brand,
            context.product_name,
            context.model_number,
            context.category.to_lowercase(),
        ),
        None => "I can help you with your home appliance! To provide the most accurate guidance, it would be helpful to know:\n\n- What type of appliance (refrigerator, washer, dryer, etc.)?\n- What's the specific problem you're experiencing?\n- When did it start happening?\n\nWith this information, I can give you targeted troubleshooting steps and solutions.".to_string(),
    };

    return ResponseBundle {
        content,
        steps: vec![
            Step::new(
                "Safety First - Unplug the Appliance",
                "Before starting any repair work, ensure you have proper safety gear including gloves and safety glasses. Always unplug the appliance from the power outlet or turn off the circuit breaker. For gas appliances, turn off the gas supply. Never proceed if you're unsure about any step - consult a licensed professional when in doubt.",
            ),
            Step::new(
                "Identify the problem",
                "Carefully observe the symptoms. Check for error codes in the manual, unusual sounds, or visible damage.",
            ),
            Step::new(
                "Check basic issues first",
                "Verify power supply, check if filters need cleaning, ensure doors/lids close properly, and look for any obvious obstructions.",
            ),
            Step::new(
                "Consult the manual",
                "Review your appliance manual's troubleshooting section for model-specific guidance and part numbers.",
            ),
        ],
        materials: vec![
            Material::new("Replacement parts (as needed)", Some("varies"), None),
            Material::new("Cleaning supplies", Some("as needed"), None),
        ],
        tools: vec![
            Tool::new("Screwdriver set", None),
            Tool::new("Multimeter (for electrical issues)", None),
            Tool::new("Flashlight", None),
            Tool::new("Cleaning brushes", None),
        ],
    };
}

pub(super) fn general() -> ResponseBundle {
    return ResponseBundle {
        content: "Great question! I can help you with that DIY project. Let me provide you with some general guidance to get started. For more specific help, feel free to provide additional details about your project.".to_string(),
        steps: vec![
            Step::new(
                "Assess the situation",
                "Take a close look at the area or item you need to work on. Document with photos if helpful.",
            ),
            Step::new(
                "Research and plan",
                "Look up specific requirements for your project. Check local building codes if applicable.",
            ),
            Step::new(
                "Gather materials and tools",
                "Make a comprehensive list of everything you'll need before starting the project.",
            ),
            Step::new(
                "Execute carefully",
                "Follow instructions step by step. Don't rush, and ask for help if needed.",
            ),
        ],
        materials: vec![Material::new(
            "Project-specific materials",
            Some("as needed"),
            None,
        )],
        tools: vec![
            Tool::new("Basic hand tools", None),
            Tool::new("Safety equipment", None),
        ],
    };
}
